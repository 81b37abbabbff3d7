fn main() -> anyhow::Result<()> {
    let config_path = std::env::args_os().nth(1).map(std::path::PathBuf::from);
    waymark_app::run(config_path)
}
