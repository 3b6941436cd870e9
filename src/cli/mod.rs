use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Start the HTTP relay
    Serve {
        #[arg(short, long, default_value = "8787")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the server on all network interfaces
        #[arg(long)]
        public: bool,
    },
}
