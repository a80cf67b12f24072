//! Random stand-in when the scheduled leader is out.

use rand::{seq::SliceRandom, Rng};

use crate::models::roster::TeamRoster;

/// Picks a random roster member other than `exclude`. `None` when nobody else
/// is available.
pub fn pick_replacement<R: Rng + ?Sized>(
    roster: &TeamRoster,
    exclude: Option<&str>,
    rng: &mut R,
) -> Option<String> {
    let candidates: Vec<&String> = roster
        .members()
        .iter()
        .filter(|member| Some(member.as_str()) != exclude)
        .collect();

    candidates.choose(rng).map(|member| member.to_string())
}
