use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use formflow_core::{FormElements, FormEvent, StrengthAssessor};
use formflow_loader::{RemoteSelectLoader, ZoneTransport};

use crate::meter::render_assessment;

/// Which optional features are active, derived from the handles the host
/// supplied. An absent handle disables its feature; nothing errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub strength_meter: bool,
    pub zone_cascade: bool,
    pub upload_preview: bool,
    pub image_removal: bool,
    pub form_submit: bool,
}

/// Translates raw form events into UI mutations and dependent-select loads.
///
/// Handlers never panic and never return an error: missing elements and
/// ungated events degrade to traced no-ops.
pub struct FormController {
    elements: FormElements,
    assessor: Option<Arc<dyn StrengthAssessor>>,
    loader: Option<RemoteSelectLoader>,
    capabilities: Capabilities,
}

impl FormController {
    /// Wire the controller to the host-supplied handles. The zone cascade
    /// is active only when both the country select and the complete
    /// dependent widget are present; the strength meter only when a meter
    /// widget and an assessor are.
    pub fn new(
        elements: FormElements,
        assessor: Option<Arc<dyn StrengthAssessor>>,
        transport: Arc<dyn ZoneTransport>,
    ) -> Self {
        let loader = match (&elements.country, &elements.zone) {
            (Some(_), Some(zone)) => Some(RemoteSelectLoader::new(transport, Arc::clone(zone))),
            _ => None,
        };

        let capabilities = Capabilities {
            strength_meter: elements.strength_meter.is_some() && assessor.is_some(),
            zone_cascade: loader.is_some(),
            upload_preview: elements.upload_preview.is_some(),
            image_removal: elements.remove_flag.is_some(),
            form_submit: elements.form.is_some(),
        };
        info!(?capabilities, "form controller initialized");

        Self {
            elements,
            assessor,
            loader,
            capabilities,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Re-assess on every keystroke and render the result onto the meter.
    pub fn on_password_input(&self, raw_value: &str) {
        let (Some(assessor), Some(meter)) = (&self.assessor, &self.elements.strength_meter) else {
            debug!("password input ignored, strength meter inactive");
            return;
        };
        let assessment = assessor.assess(raw_value);
        render_assessment(meter, &assessment);
    }

    /// Country selection handler. Fires on `Change`, or on `KeyUp` for the
    /// arrow keys, and only while no zone load is pending; everything else
    /// is a no-op. Returns the handle of the spawned load, if one started.
    pub fn on_country_changed(&self, event: FormEvent) -> Option<JoinHandle<()>> {
        let loader = self.loader.as_ref()?;
        let country = self.elements.country.as_ref()?;

        if !event.moves_selection() {
            debug!(?event, "selection event ignored");
            return None;
        }
        if loader.is_loading() {
            debug!(?event, "zone load pending, selection event ignored");
            return None;
        }

        let parent = country.selected_value()?;
        Some(loader.load_options_for(&parent))
    }

    /// Mirror the chosen filename into the read-only preview field.
    pub fn on_file_chosen(&self, filename: &str) {
        match &self.elements.upload_preview {
            Some(preview) => preview.set_value(filename),
            None => debug!("file chosen but no preview field present"),
        }
    }

    /// Flag the stored image for removal and submit immediately. There is
    /// no confirmation step.
    pub fn on_remove_image_requested(&self) {
        if let Some(flag) = &self.elements.remove_flag {
            flag.set_value("1");
        }
        self.submit_form();
    }

    /// Trigger native submission of the enclosing form, if present.
    pub fn submit_form(&self) {
        match &self.elements.form {
            Some(form) => form.submit(),
            None => debug!("submit requested but no form handle present"),
        }
    }
}
