use tracing::debug;

use shared::board::BoardQuery;
use shared::net_index::{NetIndex, NetName};
use shared::pad::PadDescriptor;

/// Walk the board's net catalog and group pads by net name.
///
/// Unnamed nets are dropped, and so are named nets that no pad reports.
/// Pads within a net keep the host's component-then-pad enumeration
/// order, so the result is deterministic whenever the host enumeration
/// is. One full pass, O(nets x pads); board pad counts are small enough
/// that nothing smarter is warranted.
pub fn build_net_index(board: &impl BoardQuery) -> NetIndex {
    let pads = board.pads();
    let mut index = NetIndex::new();
    for name in board.net_names() {
        if name.is_empty() {
            continue;
        }
        let net_name = NetName(name);
        if index.nets.contains_key(&net_name) {
            continue;
        }
        let members: Vec<PadDescriptor> = pads
            .iter()
            .filter(|pad| pad.net_name == net_name.0)
            .map(|pad| PadDescriptor {
                position: pad.position,
                component_ref: pad.component_ref.clone(),
                pad_number: pad.pad_number.clone(),
            })
            .collect();
        if members.is_empty() {
            debug!(net = %net_name.0, "net has no pads, skipping");
            continue;
        }
        index.nets.insert(net_name, members);
    }
    debug!(
        nets = index.nets.len(),
        pads = index.pad_count(),
        "net index built"
    );
    index
}
