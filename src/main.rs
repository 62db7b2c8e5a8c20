use revealer::error::AppResult;

fn main() -> AppResult<()> {
    revealer::entry::run()
}
