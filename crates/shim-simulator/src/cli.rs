use clap::Parser;

use crate::DEFAULT_WAIT_ATTEMPTS;

const ENV_IKURA_SHIM_PORT: &str = "IKURA_SHIM_PORT";

/// Serve requests from the rollup nodes by simulating the DA layer in memory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The address on which the shim should listen for incoming connections from the rollup nodes.
    #[arg(short, long, default_value = "127.0.0.1")]
    pub address: std::net::IpAddr,

    /// The port on which the shim should listen for incoming connections from the rollup nodes.
    #[arg(short, long, env = ENV_IKURA_SHIM_PORT, default_value = "10995")]
    pub port: u16,

    /// How many times a request for a not yet produced block is re-checked before failing.
    ///
    /// Checks are 10ms apart.
    #[arg(long, default_value_t = DEFAULT_WAIT_ATTEMPTS)]
    pub wait_attempts: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["ikura-shim-simulator"]).unwrap();
        assert_eq!(cli.address.to_string(), "127.0.0.1");
        assert_eq!(cli.wait_attempts, DEFAULT_WAIT_ATTEMPTS);
    }

    #[test]
    fn explicit_flags() {
        let cli = Cli::try_parse_from([
            "ikura-shim-simulator",
            "-a",
            "0.0.0.0",
            "-p",
            "2000",
            "--wait-attempts",
            "0",
        ])
        .unwrap();
        assert_eq!(cli.address.to_string(), "0.0.0.0");
        assert_eq!(cli.port, 2000);
        assert_eq!(cli.wait_attempts, 0);
    }
}
