//! Run orchestration for the command line tool.

use crate::config::CliConfig;
use crate::error::{Result, VlsmError};
use crate::models::SubnetRecord;
use crate::output::{export, print_lookup, print_message, print_vlsm_table, MessageKind};
use crate::processing::{allocate, expand_hosts, reverse_lookup, validate_network};
use std::path::Path;

/// Validate the base network, expand the host list and allocate.
pub fn calculate(net_id: &str, hosts: &str) -> Result<Vec<SubnetRecord>> {
    let network = validate_network(net_id)?;
    let requirements = expand_hosts(hosts)?;
    allocate(network.addr, &requirements)
}

/// Execute one invocation described by `config`.
pub fn run(config: &CliConfig) -> Result<()> {
    if let Some(cidr) = &config.reverse_lookup {
        log::info!("Reverse lookup for {cidr}");
        let lookup = reverse_lookup(cidr)?;
        print_lookup(&lookup);
        return Ok(());
    }

    let hosts = config.hosts.as_deref().ok_or_else(|| VlsmError::Config {
        message: "argument '-H/--hosts' is required unless '-r/--reverse-lookup' is used"
            .to_string(),
    })?;

    let records = calculate(&config.net_id, hosts)?;

    if !config.no_table {
        print_vlsm_table(&records);
    }

    if let Some(format) = config.export_format() {
        let path = export(&records, format, Path::new(config.output_name()))?;
        print_message(
            &format!("Data exported to {}", path.display()),
            MessageKind::Success,
        );
    }

    Ok(())
}
