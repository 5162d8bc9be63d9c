use crate::form::FieldHandle;

/// Element shown while a field holds a valid selection, typically the form's submit button.
pub trait Reveal {
    fn show(&mut self);
    fn hide(&mut self);
}

/// Styling hook that paints the spinner on a field while its search is in flight.
pub trait BusyIndicator {
    fn busy(&mut self, field: &FieldHandle, spinner: &str);
    fn idle(&mut self, field: &FieldHandle);
}

#[derive(Default)]
pub struct Collaborators {
    pub reveal: Option<Box<dyn Reveal>>,
    pub indicator: Option<Box<dyn BusyIndicator>>,
}

impl Collaborators {
    pub fn show(&mut self) {
        if let Some(reveal) = self.reveal.as_mut() {
            reveal.show();
        }
    }

    pub fn hide(&mut self) {
        if let Some(reveal) = self.reveal.as_mut() {
            reveal.hide();
        }
    }

    pub fn busy(&mut self, field: &FieldHandle, spinner: Option<&str>) {
        if let (Some(indicator), Some(spinner)) = (self.indicator.as_mut(), spinner) {
            indicator.busy(field, spinner);
        }
    }

    pub fn idle(&mut self, field: &FieldHandle) {
        if let Some(indicator) = self.indicator.as_mut() {
            indicator.idle(field);
        }
    }
}
