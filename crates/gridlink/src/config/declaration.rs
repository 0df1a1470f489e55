use gridlink_core::schema::Column;
use serde::Serialize;

/// A binding path the widget depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub path: String,

    /// The path resolves to a collection rather than a single value
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub iterable: bool,
}

impl Declaration {
    fn new(path: impl Into<String>, iterable: bool) -> Declaration {
        Declaration {
            path: path.into(),
            iterable,
        }
    }
}

/// A datasource id split into its namespace and local id.
struct SourceId<'a> {
    namespace: Option<&'a str>,
    id: &'a str,
}

impl<'a> SourceId<'a> {
    fn parse(src: &'a str) -> SourceId<'a> {
        match src.split_once(':') {
            Some((namespace, id)) => SourceId {
                namespace: Some(namespace).filter(|ns| !ns.is_empty()),
                id,
            },
            None => SourceId {
                namespace: None,
                id: src,
            },
        }
    }

    fn qualify(&self, path: String) -> String {
        match self.namespace {
            Some(namespace) => format!("{namespace}:{path}"),
            None => path,
        }
    }
}

pub(super) fn declarations(
    datasource: &str,
    current_element: &str,
    columns: &[Column],
) -> Vec<Declaration> {
    let ds = SourceId::parse(datasource.trim());
    let current = SourceId::parse(current_element);

    if ds.id.is_empty() && current.id.is_empty() {
        return vec![];
    }

    let mut ret = vec![Declaration::new(datasource, true)];

    if !current_element.is_empty() {
        ret.push(Declaration::new(current_element, false));
    }

    for column in columns {
        let source = column.source.trim();

        if !current.id.is_empty() && current.namespace == ds.namespace {
            ret.push(Declaration::new(
                ds.qualify(format!("{}.{source}", current.id)),
                false,
            ));
        }

        ret.push(Declaration::new(
            ds.qualify(format!("{}.[].{source}", ds.id)),
            ds.id.starts_with('$'),
        ));
    }

    ret
}
