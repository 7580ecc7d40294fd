use std::sync::Arc;

use crate::types::{PasswordAssessment, SelectOption};
use crate::widget::DependentSelect;

/// Opaque handle to a host element that can be shown or hidden. Show and
/// hide are mutually exclusive display states.
pub trait ElementHandle: Send + Sync {
    fn show(&self);
    fn hide(&self);
}

/// A text-bearing input the controller writes into, like the upload
/// preview field or the hidden remove flag.
pub trait FieldHandle: ElementHandle {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
}

/// A select element whose option set the loader replaces wholesale.
pub trait SelectHandle: ElementHandle {
    /// Value of the currently selected option, if any option is selected.
    fn selected_value(&self) -> Option<String>;

    /// Drop all existing options and append `options` in the given order.
    fn replace_options(&self, options: &[SelectOption]);

    fn set_enabled(&self, enabled: bool);
}

/// A native meter element taking the raw score.
pub trait MeterHandle: ElementHandle {
    fn set_value(&self, score: f64);
}

/// The enclosing form.
pub trait FormHandle: Send + Sync {
    /// Trigger native submission.
    fn submit(&self);
}

/// External password strength assessment. The scoring algorithm is a
/// provided black box; only the numeric score is interpreted here.
pub trait StrengthAssessor: Send + Sync {
    fn assess(&self, password: &str) -> PasswordAssessment;
}

/// Strength display widget: either a native meter taking the score
/// directly, or a fixed set of segments revealed low-to-high.
#[derive(Clone)]
pub enum StrengthMeter {
    Native(Arc<dyn MeterHandle>),
    Segmented(Vec<Arc<dyn ElementHandle>>),
}

/// Host-provided element handles, injected at construction so the
/// controller is testable without a real document.
///
/// Every field is optional: an absent handle disables the corresponding
/// feature instead of raising an error.
#[derive(Clone, Default)]
pub struct FormElements {
    pub form: Option<Arc<dyn FormHandle>>,
    pub country: Option<Arc<dyn SelectHandle>>,
    pub zone: Option<Arc<DependentSelect>>,
    pub strength_meter: Option<StrengthMeter>,
    pub upload_preview: Option<Arc<dyn FieldHandle>>,
    pub remove_flag: Option<Arc<dyn FieldHandle>>,
}
