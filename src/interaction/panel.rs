/// Content and visibility of the item info panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InfoPanel {
    visible: bool,
    title: String,
    description: String,
}

impl InfoPanel {
    pub fn show(&mut self, title: &str, description: &str) {
        self.title.clear();
        self.title.push_str(title);
        self.description.clear();
        self.description.push_str(description);
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
