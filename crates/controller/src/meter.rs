use formflow_core::{PasswordAssessment, StrengthMeter};

/// Segments out of 10 to reveal for a given score. The 3.4 divisor and the
/// cap of 10 match the segmented visual asset, which assumes scores in
/// `[0, 34]`.
pub fn visible_segments(score: f64) -> usize {
    let score = score.max(0.0);
    ((score / 3.4).floor() as usize).min(10)
}

/// Render an assessment onto the configured meter widget. Native meters
/// take the raw score; segmented meters reveal segments low-to-high in
/// index order and hide the rest.
pub fn render_assessment(meter: &StrengthMeter, assessment: &PasswordAssessment) {
    match meter {
        StrengthMeter::Native(meter) => meter.set_value(assessment.score),
        StrengthMeter::Segmented(segments) => {
            let revealed = visible_segments(assessment.score);
            for (index, segment) in segments.iter().enumerate() {
                if index < revealed {
                    segment.show();
                } else {
                    segment.hide();
                }
            }
        }
    }
}
