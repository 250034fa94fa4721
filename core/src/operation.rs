#![deny(missing_docs)]

//! # Operation Model
//!
//! Value types describing one HTTP operation: method + path, identifier,
//! documentation, and request/response contracts. Operations reference
//! declared schemas by name; the registry resolves those names at
//! declaration time.

use std::fmt;

/// Supported HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET.
    Get,
    /// HTTP POST.
    Post,
    /// HTTP PUT.
    Put,
    /// HTTP PATCH.
    Patch,
    /// HTTP DELETE.
    Delete,
}

impl HttpMethod {
    /// The lowercase path-item key used in the emitted document.
    pub fn as_key(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_key())
    }
}

/// A path parameter bound to a declared schema.
#[derive(Debug, Clone, PartialEq)]
pub struct PathParam {
    /// Parameter name as it appears in the path template.
    pub name: String,
    /// Reference name of the declared schema describing the parameter.
    pub schema: String,
    /// Optional parameter description.
    pub description: Option<String>,
}

impl PathParam {
    /// Creates a path parameter referencing a declared schema.
    pub fn new(name: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: schema.into(),
            description: None,
        }
    }

    /// Sets the parameter description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A JSON request body referencing a declared schema.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBody {
    /// Human-readable body description.
    pub description: String,
    /// Reference name of the declared schema describing the body.
    pub schema: String,
}

impl RequestBody {
    /// Creates a request body referencing a declared schema.
    pub fn new(description: impl Into<String>, schema: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            schema: schema.into(),
        }
    }
}

/// One response entry: description plus an optional JSON body schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    /// Human-readable response description.
    pub description: String,
    /// Reference name of the declared schema describing the body, if any.
    pub schema: Option<String>,
}

impl Response {
    /// Creates a bodiless response.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            schema: None,
        }
    }

    /// Attaches a JSON body schema reference.
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }
}

/// One HTTP method bound to one path, with its contracts.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Globally unique operation identifier.
    pub operation_id: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// URL path template (e.g. `/burgers/{id}`).
    pub path: String,
    /// Short summary.
    pub summary: Option<String>,
    /// Longer description.
    pub description: Option<String>,
    /// Path parameters, in declaration order.
    pub path_params: Vec<PathParam>,
    /// Optional request body.
    pub request_body: Option<RequestBody>,
    /// (status code, response) entries, in declaration order. Uniqueness of
    /// status codes is enforced when the operation joins a registry.
    pub responses: Vec<(String, Response)>,
}

impl Operation {
    /// Creates a new operation with the required identifier, method, and path.
    pub fn new(
        operation_id: impl Into<String>,
        method: HttpMethod,
        path: impl Into<String>,
    ) -> Self {
        Self {
            operation_id: operation_id.into(),
            method,
            path: path.into(),
            summary: None,
            description: None,
            path_params: Vec::new(),
            request_body: None,
            responses: Vec::new(),
        }
    }

    /// Sets the operation summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the operation description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends a path parameter.
    pub fn with_path_param(mut self, param: PathParam) -> Self {
        self.path_params.push(param);
        self
    }

    /// Sets the request body.
    pub fn with_request_body(mut self, body: RequestBody) -> Self {
        self.request_body = Some(body);
        self
    }

    /// Adds a response for the given status code.
    pub fn with_response(mut self, status: impl Into<String>, response: Response) -> Self {
        self.responses.push((status.into(), response));
        self
    }

    /// Iterates over every schema reference the operation makes.
    pub fn schema_refs(&self) -> impl Iterator<Item = &str> {
        self.request_body
            .iter()
            .map(|body| body.schema.as_str())
            .chain(self.path_params.iter().map(|param| param.schema.as_str()))
            .chain(
                self.responses
                    .iter()
                    .filter_map(|(_, response)| response.schema.as_deref()),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_keys_are_lowercase() {
        assert_eq!(HttpMethod::Get.as_key(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
    }

    #[test]
    fn test_schema_refs_cover_all_positions() {
        let op = Operation::new("updateWidget", HttpMethod::Put, "/widgets/{id}")
            .with_path_param(PathParam::new("id", "WidgetId"))
            .with_request_body(RequestBody::new("The widget.", "WidgetCreate"))
            .with_response("200", Response::new("Updated.").with_schema("Widget"))
            .with_response("404", Response::new("Not found."));

        let refs: Vec<&str> = op.schema_refs().collect();
        assert_eq!(refs, vec!["WidgetCreate", "WidgetId", "Widget"]);
    }
}
