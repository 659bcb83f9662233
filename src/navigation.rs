/// The two screens of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ViewName {
    #[default]
    Today,
    Weekly,
}

/// Owns which screen is showing. Switching screens unmounts the old view,
/// so the newly mounted one always fetches afresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewController {
    current: ViewName,
}

impl ViewController {
    pub fn current(&self) -> ViewName {
        self.current
    }

    pub fn go_to_weekly(&mut self) {
        self.current = ViewName::Weekly;
    }

    pub fn go_to_today(&mut self) {
        self.current = ViewName::Today;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_today() {
        assert_eq!(ViewController::default().current(), ViewName::Today);
    }

    #[test]
    fn transitions_are_unconditional() {
        let mut controller = ViewController::default();
        controller.go_to_weekly();
        controller.go_to_weekly();
        assert_eq!(controller.current(), ViewName::Weekly);
        controller.go_to_today();
        assert_eq!(controller.current(), ViewName::Today);
        controller.go_to_today();
        assert_eq!(controller.current(), ViewName::Today);
    }
}
