use tracing::debug;

/// Facet values the user has switched on
///
/// Keeps insertion order and a comma-joined projection that is recomputed
/// after every mutation. Values are not checked against a [`FacetIndex`],
/// any string can be toggled.
///
/// [`FacetIndex`]: crate::facets::FacetIndex
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FacetFilter {
    values: Vec<String>,
    joined: String,
}

impl FacetFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the value if active, otherwise append it
    /// Returns whether the value is active afterwards
    pub fn toggle(&mut self, value: &str) -> bool {
        let active = match self.values.iter().position(|v| v == value) {
            Some(pos) => {
                self.values.remove(pos);
                false
            }
            None => {
                self.values.push(value.to_string());
                true
            }
        };

        self.joined = self.values.join(",");
        debug!(value, active, joined = %self.joined, "toggled facet");
        active
    }

    pub fn clear(&mut self) {
        self.values.clear();
        self.joined.clear();
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Active values in insertion order
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Active values joined by `,` in insertion order
    pub fn joined(&self) -> &str {
        &self.joined
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}
