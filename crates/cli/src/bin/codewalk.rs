use anyhow::Result;

fn main() -> Result<()> {
    codewalk_cli::main_entry()
}
