use wellpath_core::models::metrics::BmiBand;

/// Body-mass index from imperial height and weight, rounded to 2 decimals.
///
/// `None` unless weight is positive and total height is non-zero.
pub fn compute_bmi(height_feet: f64, height_inches: f64, weight_lbs: f64) -> Option<f64> {
    let total_inches = height_feet * 12.0 + height_inches;
    if !(weight_lbs > 0.0) || total_inches == 0.0 || !total_inches.is_finite() {
        return None;
    }

    let bmi = weight_lbs / (total_inches * total_inches) * 703.0;
    let rounded = (bmi * 100.0).round() / 100.0;
    (rounded.is_finite() && rounded > 0.0).then_some(rounded)
}

/// Band a BMI against the fixed thresholds.
///
/// The `low` cut compares whole BMI units, so `22.97` still bands as `low`.
/// The upper cut compares the exact value.
/// - whole units `≤ 22` → `low`
/// - otherwise `≤ 25` → `normal_highrisk`
/// - `> 25` → `over25`
pub fn bmi_band(bmi: f64) -> BmiBand {
    if bmi.trunc() <= 22.0 {
        BmiBand::Low
    } else if bmi <= 25.0 {
        BmiBand::NormalHighrisk
    } else {
        BmiBand::Over25
    }
}
