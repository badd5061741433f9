fn main() -> Result<(), Box<dyn std::error::Error>> {
    henon_explorer::init_logging(henon_explorer::LoggingConfig::default());

    let command = henon_explorer::RunGuiCommand::new(henon_explorer::ExplorerConfig::default());

    command.execute()
}
