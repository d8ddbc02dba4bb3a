use types::{resolver, RallyState, Roster, RotationPolicy, Team};

/// Default rotation: whoever received the previous shot hits the next one;
/// at the start of a rally the first roster entry serves.
#[derive(Debug, Default)]
pub struct ReceiverRotation {}

impl RotationPolicy for ReceiverRotation {
    fn next_hitter(&self, state: &RallyState, roster: &Roster) -> String {
        resolver::next_hitter(state.last_receiver.as_deref(), state.order, roster).to_string()
    }
}

/// Strict side-alternating rotation for drills: players take turns in a
/// fixed interleaved order, ignoring who actually received.
#[derive(Debug, Default)]
pub struct FixedOrder {}

impl FixedOrder {
    fn interleaved<'a>(&self, roster: &'a Roster) -> Vec<&'a str> {
        let side_a: Vec<_> = roster
            .players()
            .filter(|p| roster.side_of(p) == Some(Team::A))
            .collect();
        let side_b: Vec<_> = roster
            .players()
            .filter(|p| roster.side_of(p) == Some(Team::B))
            .collect();

        let mut order = Vec::with_capacity(roster.len());
        for i in 0..side_a.len().max(side_b.len()) {
            if let Some(p) = side_a.get(i) {
                order.push(*p);
            }
            if let Some(p) = side_b.get(i) {
                order.push(*p);
            }
        }
        order
    }
}

impl RotationPolicy for FixedOrder {
    fn next_hitter(&self, state: &RallyState, roster: &Roster) -> String {
        let order = self.interleaved(roster);
        let idx = (state.order as usize - 1) % order.len();
        order[idx].to_string()
    }
}

/// Look up a policy by its configuration name.
pub fn policy_named(name: &str) -> Option<Box<dyn RotationPolicy>> {
    match name {
        "receiver" => Some(Box::new(ReceiverRotation::default())),
        "fixed" => Some(Box::new(FixedOrder::default())),
        _ => {
            log::warn!("Unknown rotation policy: {name}");
            None
        }
    }
}
