#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub subject: String,
    pub message: String,
}

/// Non-fatal findings collected while resolving a descriptor.
///
/// Anything fatal is a `ConfigError` and aborts loading instead.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push_warning(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        self.warnings.push(Diagnostic { subject: subject.into(), message: message.into() });
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn emit(&self) {
        for diagnostic in &self.warnings {
            eprintln!("[WARN] {}: {}", diagnostic.subject, diagnostic.message);
        }
    }
}
