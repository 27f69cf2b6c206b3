//! Print the campus network as JSON for external viewers.
//!
//! ```text
//! cargo run -p campus --bin export_network > campus_network.json
//! ```

mod network;

use anyhow::Result;

use network::{build_network, campus_definition};

fn main() -> Result<()> {
    // Building validates the definition (connected, no zero-length roads).
    let net = build_network()?;
    eprintln!("{} vertices, {} edges", net.vertex_count(), net.edge_count());

    println!("{}", serde_json::to_string_pretty(&campus_definition())?);
    Ok(())
}
