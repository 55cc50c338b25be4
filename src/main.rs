use anyhow::Result;

fn main() -> Result<()> {
    termdesk::run()
}
