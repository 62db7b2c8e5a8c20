use std::time::Duration;

use crate::settings::Settings;

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>⏰ Countdown Timer App</title>
<style>
  body {
    margin: 0;
    font-family: sans-serif;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    min-height: 100vh;
    color: #ffffff;
  }
  main { max-width: 640px; margin: 0 auto; padding: 16px; }
  .countdown-text {
    font-size: 24px;
    font-weight: bold;
    text-align: center;
    padding: 20px;
    background: rgba(0, 0, 0, 0.7);
    border-radius: 15px;
    margin: 10px;
  }
  .cake-container {
    text-align: center;
    padding: 20px;
    background: rgba(255, 255, 255, 0.9);
    border-radius: 15px;
    margin: 10px;
  }
  .cake-container img { max-width: 100%; }
  label { display: block; font-size: 14px; margin-bottom: 6px; }
  #refresh-btn { margin: 10px; padding: 6px 14px; border-radius: 8px; border: none; cursor: pointer; }
</style>
</head>
<body>
<main>
  <section class="countdown-text">
    <h1>⏰ Countdown Timer</h1>
    <h2>Important date approaching!</h2>
    <p>Keep an eye on the countdown - something special happens on __TARGET_LABEL__! 📅</p>
  </section>
  <section class="countdown-text">
    <label for="countdown">⏰ Countdown Timer</label>
    <output id="countdown">__COUNTDOWN_TEXT__</output>
  </section>
  <section class="cake-container">
    <label>📅 Special Date</label>
    <img id="display" src="/api/placeholder.png" width="400" height="300" alt="Countdown display">
  </section>
  <section>
    <h3>📅 Event Features:</h3>
    <ul>
      <li><strong>Real-time countdown</strong> to __TARGET_LABEL__</li>
      <li><strong>Special display</strong> when the date arrives</li>
      <li><strong>Interactive interface</strong> with live updates</li>
      <li><strong>Mysterious content</strong> revealed at the right time</li>
    </ul>
    <p><em>Something amazing will happen when the countdown reaches zero!</em> ✨</p>
  </section>
  <button id="refresh-btn" type="button">🔄 Refresh</button>
</main>
<script>
  const POLL_INTERVAL_MS = __POLL_INTERVAL_MS__;
  async function refresh() {
    try {
      const response = await fetch('/api/poll', { cache: 'no-store' });
      if (!response.ok) {
        return;
      }
      const data = await response.json();
      document.getElementById('countdown').textContent = data.text;
      document.getElementById('display').src = data.image;
    } catch (err) {
      console.error('poll failed', err);
    }
  }
  document.getElementById('refresh-btn').addEventListener('click', refresh);
  refresh();
  setTimeout(() => setInterval(refresh, POLL_INTERVAL_MS), POLL_INTERVAL_MS);
</script>
</body>
</html>
"#;

/// Static parts of the index page; the countdown text is filled per request.
#[derive(Debug, Clone)]
pub(super) struct PageTemplate {
    target_label: String,
    poll_interval_ms: u128,
}

impl PageTemplate {
    pub(super) fn from_settings(settings: &Settings) -> Self {
        Self {
            target_label: format!(
                "{} {}",
                settings.render.month_label, settings.render.day_label
            ),
            poll_interval_ms: poll_interval_ms(settings.poll_interval),
        }
    }

    pub(super) fn render(&self, countdown_text: &str) -> String {
        TEMPLATE
            .replace("__TARGET_LABEL__", &escape_html(&self.target_label))
            .replace("__COUNTDOWN_TEXT__", &escape_html(countdown_text))
            .replace("__POLL_INTERVAL_MS__", &self.poll_interval_ms.to_string())
    }
}

fn poll_interval_ms(interval: Duration) -> u128 {
    interval.as_millis().max(1)
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
