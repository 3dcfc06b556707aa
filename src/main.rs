use anyhow::Result;

fn main() -> Result<()> {
    timecode_markers::cli::run()
}
