mod entry;
mod logger;

use apicheck::error::AppResult;

fn main() -> AppResult<()> {
    entry::run()
}
