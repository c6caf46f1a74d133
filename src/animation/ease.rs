/// Easing curve applied to normalized animation progress.
///
/// `OutQuart` is the default counter curve; `OutElastic` overshoots mid-flight
/// before settling, which is the point of it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    Linear,
    OutQuad,
    OutCubic,
    #[default]
    OutQuart,
    OutElastic,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::OutElastic => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    const C: f64 = std::f64::consts::TAU / 3.0;
                    (2.0_f64).powf(-10.0 * t) * ((t * 10.0 - 0.75) * C).sin() + 1.0
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
