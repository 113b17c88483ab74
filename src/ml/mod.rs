// ============================================================
// Layer 5 — ML Layer (Burn)
// ============================================================
// The only layer that imports burn. The training loop that
// produces snapshots lives with the tutorial model code;
// what it shares with this crate is the loss:
//
//   loss.rs — clipped binary cross-entropy, generic over
//             any burn Backend and tensor rank
//
// Reference: Burn Book §3 (Building Blocks)

/// Clipped cross-entropy loss
pub mod loss;
