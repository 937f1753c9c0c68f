use crate::builtin::{NumberPlateField, StreetTermsField, TipsField};
use crate::error::RegistryError;
use crate::render::{LabelStyle, Renderer};
use crate::resolve::{walk, walk_value};
use fxhash::{FxHashMap, FxHashSet};
use geohint_domain::config::FieldsConfig;
use geohint_domain::path::{Directive, RESERVED_PREFIX};
use geohint_domain::{CountryRecord, FieldPath, Value};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How a computed field is shown on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Shown as a plain text label; its value can be filtered on.
    Text,
    /// Shown through a rendered fragment; its value only signals presence.
    Visual,
}

/// A field whose value is computed from the whole record.
pub trait ComputedField: Send + Sync + fmt::Debug {
    /// The value for `record`, or `None` when there is nothing to show.
    fn compute(&self, record: &CountryRecord) -> Option<Value>;

    fn kind(&self) -> FieldKind {
        FieldKind::Text
    }

    /// Markup for visual fields. Text fields keep the default.
    fn render(&self, _renderer: &Renderer, _country: &str, _record: &CountryRecord, _style: &LabelStyle) -> Option<String> {
        None
    }
}

/// Closed table of computed fields plus the filter allow-list for plain keys.
///
/// All resolution, presence and filter questions about a [`FieldPath`] go
/// through here.
pub struct FieldRegistry {
    computed: FxHashMap<String, Box<dyn ComputedField>>,
    filterable_keys: FxHashSet<String>,
}

impl fmt::Debug for FieldRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.computed.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("FieldRegistry")
            .field("computed", &names)
            .field("filterable_keys", &self.filterable_keys)
            .finish()
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::builtin(&FieldsConfig::default())
    }
}

impl FieldRegistry {
    /// A registry without computed fields.
    #[must_use]
    pub fn empty(config: &FieldsConfig) -> Self {
        Self {
            computed: FxHashMap::default(),
            filterable_keys: config.filterable_keys.iter().cloned().collect(),
        }
    }

    /// The shipped computed fields: street terms, number plate and tips.
    #[must_use]
    pub fn builtin(config: &FieldsConfig) -> Self {
        let mut registry = Self::empty(config);
        let builtins: [(&str, Box<dyn ComputedField>); 3] = [
            (StreetTermsField::NAME, Box::new(StreetTermsField::default())),
            (NumberPlateField::NAME, Box::new(NumberPlateField)),
            (TipsField::NAME, Box::new(TipsField)),
        ];
        for (name, field) in builtins {
            registry.insert(name.to_owned(), field);
        }
        registry
    }

    /// Adds a computed field under a reserved `#` marker.
    ///
    /// # Errors
    /// [`RegistryError::InvalidMarker`] if `name` is not a `#` marker or is a
    /// presentation directive, [`RegistryError::Duplicate`] if taken.
    pub fn register(&mut self, name: impl Into<String>, field: impl ComputedField + 'static) -> Result<(), RegistryError> {
        let name = name.into();
        if name.len() <= RESERVED_PREFIX.len_utf8()
            || !name.starts_with(RESERVED_PREFIX)
            || Directive::from_str(&name).is_ok()
        {
            return Err(RegistryError::InvalidMarker { name, context: None });
        }
        if self.computed.contains_key(&name) {
            return Err(RegistryError::Duplicate { name, context: None });
        }
        self.insert(name, Box::new(field));
        Ok(())
    }

    fn insert(&mut self, name: String, field: Box<dyn ComputedField>) {
        debug!(field = %name, kind = ?field.kind(), "Computed field registered");
        self.computed.insert(name, field);
    }

    /// Registered marker names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.computed.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub(crate) fn computed(&self, path: &FieldPath) -> Option<&dyn ComputedField> {
        match path {
            FieldPath::Computed(name) => self.computed.get(name).map(|field| &**field),
            _ => None,
        }
    }

    /// Resolves `path` against `record`.
    ///
    /// Plain and dotted paths borrow from the record; computed fields yield
    /// an owned value. Directives and unknown markers resolve to `None`.
    #[must_use]
    pub fn resolve<'r>(&self, path: &FieldPath, record: &'r CountryRecord) -> Option<Cow<'r, Value>> {
        match path {
            FieldPath::Key(_) | FieldPath::Nested(_) => {
                walk(record, path.segments()?).map(Cow::Borrowed)
            },
            FieldPath::Computed(_) => self.computed(path)?.compute(record).map(Cow::Owned),
            FieldPath::Directive(_) => None,
        }
    }

    /// [`Self::resolve`] for a raw path string.
    #[must_use]
    pub fn resolve_str<'r>(&self, raw: &str, record: &'r CountryRecord) -> Option<Cow<'r, Value>> {
        self.resolve(&FieldPath::parse(raw), record)
    }

    /// [`Self::resolve`] for input that may not be a record at all.
    #[must_use]
    pub fn resolve_value<'v>(&self, path: &FieldPath, value: &'v Value) -> Option<Cow<'v, Value>> {
        match path {
            FieldPath::Key(_) | FieldPath::Nested(_) => {
                walk_value(value, path.segments()?).map(Cow::Borrowed)
            },
            FieldPath::Computed(_) => {
                let map = value.as_nested()?;
                let record = CountryRecord::from(map.clone());
                self.computed(path)?.compute(&record).map(Cow::Owned)
            },
            FieldPath::Directive(_) => None,
        }
    }

    /// `true` for registered computed fields.
    #[must_use]
    pub fn is_dynamic_field(&self, path: &FieldPath) -> bool {
        self.computed(path).is_some()
    }

    /// `true` for computed fields shown through a rendered fragment.
    #[must_use]
    pub fn is_visual_field(&self, path: &FieldPath) -> bool {
        self.computed(path).is_some_and(|field| field.kind() == FieldKind::Visual)
    }

    /// Whether `path` may be offered as a filter target. Depends only on the
    /// path and the registry, never on data.
    #[must_use]
    pub fn is_filterable(&self, path: &FieldPath) -> bool {
        match path {
            FieldPath::Key(key) => self.filterable_keys.contains(key),
            FieldPath::Nested(_) => true,
            FieldPath::Computed(_) => {
                self.computed(path).is_some_and(|field| field.kind() == FieldKind::Text)
            },
            FieldPath::Directive(_) => false,
        }
    }

    /// Markup for a visual field, or `None` for other paths or when the
    /// record has no content for it.
    #[must_use]
    pub fn render_visual_fragment(
        &self,
        renderer: &Renderer,
        path: &FieldPath,
        country: &str,
        record: &CountryRecord,
        style: &LabelStyle,
    ) -> Option<String> {
        let field = self.computed(path).filter(|field| field.kind() == FieldKind::Visual)?;
        field.render(renderer, country, record, style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Constant;

    impl ComputedField for Constant {
        fn compute(&self, _record: &CountryRecord) -> Option<Value> {
            Some(Value::from("constant"))
        }
    }

    #[test]
    fn registration_rejects_bad_names() {
        let mut registry = FieldRegistry::default();
        assert!(matches!(
            registry.register("currency", Constant),
            Err(RegistryError::InvalidMarker { .. })
        ));
        assert!(matches!(registry.register("#", Constant), Err(RegistryError::InvalidMarker { .. })));
        assert!(matches!(
            registry.register("#no_text", Constant),
            Err(RegistryError::InvalidMarker { .. })
        ));
        assert!(matches!(
            registry.register("#dynamic_street_terms", Constant),
            Err(RegistryError::Duplicate { .. })
        ));
    }

    #[test]
    fn registered_fields_resolve_and_filter() {
        let mut registry = FieldRegistry::empty(&FieldsConfig::default());
        let path = FieldPath::parse("#dynamic_currency");
        assert!(registry.resolve(&path, &CountryRecord::new()).is_none());
        assert!(!registry.is_filterable(&path));

        registry.register("#dynamic_currency", Constant).expect("fresh marker");
        assert_eq!(
            registry.resolve(&path, &CountryRecord::new()).as_deref(),
            Some(&Value::from("constant"))
        );
        assert!(registry.is_dynamic_field(&path));
        assert!(registry.is_filterable(&path));
        assert!(!registry.is_visual_field(&path));
    }

    #[test]
    fn builtin_names_are_sorted() {
        assert_eq!(
            FieldRegistry::default().names(),
            ["#dynamic_street_terms", "#geoguessr_tips", "#number_plate_visual"]
        );
    }
}
