//! Login / create-account tab selection

/// The two tabs of the authentication view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum AuthTab {
    #[default]
    Login = 0,
    Register = 1,
}

/// Tab index outside the two known tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("No tab at index {0}")]
pub struct UnknownTab(pub usize);

impl AuthTab {
    pub const ALL: [AuthTab; 2] = [AuthTab::Login, AuthTab::Register];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The other tab
    pub fn other(self) -> Self {
        match self {
            AuthTab::Login => AuthTab::Register,
            AuthTab::Register => AuthTab::Login,
        }
    }

    /// Label shown on the tab itself
    pub fn label(self) -> &'static str {
        match self {
            AuthTab::Login => "Login",
            AuthTab::Register => "Create Account",
        }
    }

    /// Heading shown above the form
    pub fn heading(self) -> &'static str {
        self.label()
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthTab::Login => "Login",
            AuthTab::Register => "Register",
        }
    }

    /// Page background colour while the tab is shown
    pub fn background(self) -> &'static str {
        match self {
            AuthTab::Login => "#e0f7fa",
            AuthTab::Register => "#fce4ec",
        }
    }
}

impl TryFrom<usize> for AuthTab {
    type Error = UnknownTab;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(AuthTab::Login),
            1 => Ok(AuthTab::Register),
            other => Err(UnknownTab(other)),
        }
    }
}

/// Holds the currently shown tab; starts on [`AuthTab::Login`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSelector {
    current: AuthTab,
}

impl TabSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> AuthTab {
        self.current
    }

    pub fn select(&mut self, tab: AuthTab) {
        self.current = tab;
    }

    /// Select by index, as reported by the tab strip
    pub fn select_index(&mut self, index: usize) -> Result<AuthTab, UnknownTab> {
        let tab = AuthTab::try_from(index)?;
        self.select(tab);
        Ok(tab)
    }

    pub fn toggle(&mut self) {
        self.select(self.current.other());
    }
}
