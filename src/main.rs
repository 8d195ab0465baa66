use figure_script::cli;

fn main() {
    let command_line_interface = cli::CommandLineInterface::load();
    if command_line_interface.is_no_op() {
        eprintln!("{command_line_interface:#?}");
        return
    }
    command_line_interface.init_logging();
    if let Err(error) = command_line_interface.run() {
        eprintln!("Error: {error:#}");
        std::process::exit(1);
    }
}
