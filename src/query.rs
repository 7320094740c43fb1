use std::fmt::Display;

use crate::variable::OpenMeteoConst;

/// Accumulates query parameters in declared field order and renders the
/// final `key=value&...` string.
///
/// Values come from validated options and fixed tokens, none of which need
/// percent-escaping, so none is applied. Encoding never fails.
#[derive(Debug, Default)]
pub(crate) struct QueryBuilder {
    pairs: Vec<(&'static str, String)>,
}

impl QueryBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, name: &'static str, value: impl Display) -> &mut Self {
        self.pairs.push((name, value.to_string()));
        self
    }

    /// Skips the pair entirely when the value is `None`.
    pub(crate) fn push_opt(
        &mut self,
        name: &'static str,
        value: Option<impl Display>,
    ) -> &mut Self {
        if let Some(value) = value {
            self.push(name, value);
        }
        self
    }

    /// Comma-joins the variable list under a single key, the list format the
    /// Open-Meteo API expects. An unset list is omitted; an explicitly empty
    /// list still emits the key once with an empty value.
    pub(crate) fn push_consts(
        &mut self,
        name: &'static str,
        values: Option<&[OpenMeteoConst]>,
    ) -> &mut Self {
        if let Some(values) = values {
            let joined = values
                .iter()
                .map(|v| v.as_str())
                .collect::<Vec<_>>()
                .join(",");
            self.pairs.push((name, joined));
        }
        self
    }

    pub(crate) fn finish(&self) -> String {
        self.pairs
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}
