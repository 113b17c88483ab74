// ============================================================
// Layer 5 — Clipped Cross-Entropy Loss
// ============================================================
// Binary cross-entropy summed over every element:
//
//   L = -Σ [ t·log(a) + (1-t)·log(1-a) ]
//
// With sigmoid outputs, `a` can reach exactly 0 or 1 and
// log(0) = -inf turns into NaN as soon as it is multiplied
// by a zero target. Both `a` and `1-a` are therefore clamped
// into [1e-10, 1.0] before the log, which caps a single
// element's loss at -ln(1e-10) ≈ 23.03.
//
// Reference: Burn Book §3 (Tensor operations)
//            Bishop (2006) §4.3.2 (Cross-entropy error)

use burn::prelude::*;

/// Lower clamp bound before taking a log
pub const CLIP_MIN: f64 = 1e-10;

/// Upper clamp bound before taking a log
pub const CLIP_MAX: f64 = 1.0;

/// Clamp every element into [CLIP_MIN, CLIP_MAX].
pub fn clipped<B: Backend, const D: usize>(x: Tensor<B, D>) -> Tensor<B, D> {
    x.clamp(CLIP_MIN, CLIP_MAX)
}

/// Summed binary cross-entropy between `target` and `activation`.
///
/// Both tensors must have the same shape; values are expected
/// in [0, 1]. Returns a single-element tensor.
///
/// # Panics
/// If the shapes differ.
pub fn cross_entropy<B: Backend, const D: usize>(
    target:     Tensor<B, D>,
    activation: Tensor<B, D>,
) -> Tensor<B, 1> {
    assert_eq!(
        target.dims(),
        activation.dims(),
        "Target and activation must have the same shape"
    );

    let target_complement     = target.clone().neg().add_scalar(1.0);
    let activation_complement = activation.clone().neg().add_scalar(1.0);

    let on  = target * clipped(activation).log();
    let off = target_complement * clipped(activation_complement).log();

    (on + off).sum().neg()
}
