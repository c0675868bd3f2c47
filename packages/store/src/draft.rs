//! # Document draft — the nested endpoint/parameter form
//!
//! A [`DocumentDraft`] holds everything the create-document form edits: the target
//! project, an ordered list of endpoints and, per endpoint, an ordered list of
//! parameters.
//!
//! ## Storage
//!
//! Records live in two flat vectors. Endpoint records keep display order;
//! parameter records carry the [`EndpointId`] of their parent and keep display
//! order among siblings. Editing a field rewrites exactly one record, so sibling
//! endpoints and parameters are never touched. The nested [`Endpoint`] values sent
//! to the backend and the keyed [`EndpointView`]s used for rendering are derived
//! on demand.
//!
//! ## Invariants
//!
//! - There is always at least one endpoint.
//! - Every endpoint has at least one parameter.
//!
//! Removal of the last element is refused (the form renders the button disabled).
//!
//! ## Lifecycle
//!
//! [`FormPhase`] tracks `Initializing → Ready → Submitting → (Ready | Submitted)`.
//! The previous document may only replace the content while `Initializing`;
//! [`DocumentDraft::begin_submit`] only succeeds from `Ready`, which is what keeps a
//! second click from sending a duplicate request.

use std::fmt;

use crate::models::{Endpoint, NewDocument, Parameter};

/// Validation failures detected before anything is sent.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DraftError {
    #[error("A project ID is required.")]
    MissingProjectId,
    #[error("\"{0}\" is not a valid project ID.")]
    InvalidProjectId(String),
    #[error("User information is required. Please sign in again.")]
    MissingUser,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Initializing,
    Ready,
    Submitting,
    Submitted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointField {
    Path,
    Method,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterField {
    Annotation,
    Type,
    Data,
}

/// Stable identity of an endpoint row for the lifetime of a draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EndpointId(u32);

/// Stable identity of a parameter row for the lifetime of a draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParameterId(u32);

impl fmt::Display for EndpointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ep-{}", self.0)
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "param-{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
struct EndpointRecord {
    id: EndpointId,
    path: String,
    method: String,
}

#[derive(Clone, Debug, PartialEq)]
struct ParameterRecord {
    id: ParameterId,
    endpoint: EndpointId,
    annotation: String,
    r#type: String,
    data: String,
}

/// Keyed, read-only projection of one endpoint for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct EndpointView {
    pub id: EndpointId,
    pub path: String,
    pub method: String,
    pub parameters: Vec<ParameterView>,
}

/// Keyed, read-only projection of one parameter for rendering.
#[derive(Clone, Debug, PartialEq)]
pub struct ParameterView {
    pub id: ParameterId,
    pub annotation: String,
    pub r#type: String,
    pub data: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentDraft {
    project_id: Result<u64, DraftError>,
    endpoints: Vec<EndpointRecord>,
    parameters: Vec<ParameterRecord>,
    previous: Vec<Endpoint>,
    phase: FormPhase,
    next_id: u32,
}

/// Accept only a positive integer project identifier.
pub fn parse_project_id(raw: Option<&str>) -> Result<u64, DraftError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(DraftError::MissingProjectId);
    }
    match raw.parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(DraftError::InvalidProjectId(raw.to_string())),
    }
}

impl DocumentDraft {
    /// A fresh draft with one endpoint holding one empty parameter.
    ///
    /// `route_project_id` is the raw route segment. An absent or malformed value
    /// is kept as an error so rendering still works and submission is refused.
    pub fn new(route_project_id: Option<&str>) -> Self {
        let mut draft = Self {
            project_id: parse_project_id(route_project_id),
            endpoints: Vec::new(),
            parameters: Vec::new(),
            previous: Vec::new(),
            phase: FormPhase::Initializing,
            next_id: 0,
        };
        draft.add_endpoint();
        draft
    }

    pub fn project_id(&self) -> Result<u64, DraftError> {
        self.project_id.clone()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Leave `Initializing`, with or without previous content.
    pub fn mark_ready(&mut self) {
        if self.phase == FormPhase::Initializing {
            self.phase = FormPhase::Ready;
        }
    }

    /// Enter `Submitting`. Returns `false` when a submission is not allowed now.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase != FormPhase::Ready {
            return false;
        }
        self.phase = FormPhase::Submitting;
        true
    }

    /// Leave `Submitting`: `Submitted` on success, back to `Ready` on failure.
    pub fn finish_submit(&mut self, succeeded: bool) {
        if self.phase == FormPhase::Submitting {
            self.phase = if succeeded {
                FormPhase::Submitted
            } else {
                FormPhase::Ready
            };
        }
    }

    pub fn endpoint_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Number of parameters under the endpoint at `endpoint`, 0 if out of range.
    pub fn parameter_count(&self, endpoint: usize) -> usize {
        match self.endpoints.get(endpoint) {
            Some(record) => self.children(record.id).count(),
            None => 0,
        }
    }

    pub fn can_remove_endpoint(&self) -> bool {
        self.endpoints.len() > 1
    }

    pub fn can_remove_parameter(&self, endpoint: usize) -> bool {
        self.parameter_count(endpoint) > 1
    }

    /// Append an endpoint with one empty parameter.
    pub fn add_endpoint(&mut self) -> EndpointId {
        let id = EndpointId(self.allocate());
        self.endpoints.push(EndpointRecord {
            id,
            path: String::new(),
            method: String::new(),
        });
        self.push_parameter(id, Parameter::default());
        id
    }

    /// Remove the endpoint at `position` together with its parameters.
    pub fn remove_endpoint(&mut self, position: usize) -> bool {
        if !self.can_remove_endpoint() || position >= self.endpoints.len() {
            return false;
        }
        let removed = self.endpoints.remove(position);
        self.parameters.retain(|p| p.endpoint != removed.id);
        true
    }

    pub fn set_endpoint_field(
        &mut self,
        position: usize,
        field: EndpointField,
        value: impl Into<String>,
    ) -> bool {
        let Some(record) = self.endpoints.get_mut(position) else {
            return false;
        };
        match field {
            EndpointField::Path => record.path = value.into(),
            EndpointField::Method => record.method = value.into(),
        }
        true
    }

    /// Append an empty parameter to the endpoint at `endpoint`.
    pub fn add_parameter(&mut self, endpoint: usize) -> Option<ParameterId> {
        let parent = self.endpoints.get(endpoint)?.id;
        Some(self.push_parameter(parent, Parameter::default()))
    }

    pub fn remove_parameter(&mut self, endpoint: usize, position: usize) -> bool {
        if !self.can_remove_parameter(endpoint) {
            return false;
        }
        match self.parameter_slot(endpoint, position) {
            Some(slot) => {
                self.parameters.remove(slot);
                true
            }
            None => false,
        }
    }

    pub fn set_parameter_field(
        &mut self,
        endpoint: usize,
        position: usize,
        field: ParameterField,
        value: impl Into<String>,
    ) -> bool {
        let Some(slot) = self.parameter_slot(endpoint, position) else {
            return false;
        };
        let record = &mut self.parameters[slot];
        match field {
            ParameterField::Annotation => record.annotation = value.into(),
            ParameterField::Type => record.r#type = value.into(),
            ParameterField::Data => record.data = value.into(),
        }
        true
    }

    /// Replace the content with a copy of a previous document's endpoints.
    ///
    /// Only applies while `Initializing`. Empty lists are padded so the draft
    /// keeps its invariants. The previous values stay available as hints.
    pub fn load_previous(&mut self, endpoints: &[Endpoint]) -> bool {
        if self.phase != FormPhase::Initializing || endpoints.is_empty() {
            return false;
        }
        self.endpoints.clear();
        self.parameters.clear();
        for endpoint in endpoints {
            let id = EndpointId(self.allocate());
            self.endpoints.push(EndpointRecord {
                id,
                path: endpoint.path.clone(),
                method: endpoint.method.clone(),
            });
            if endpoint.parameters.is_empty() {
                self.push_parameter(id, Parameter::default());
            }
            for parameter in &endpoint.parameters {
                self.push_parameter(id, parameter.clone());
            }
        }
        self.previous = endpoints.to_vec();
        true
    }

    /// Previous document's value for an endpoint field, or `""`.
    pub fn endpoint_hint(&self, endpoint: usize, field: EndpointField) -> &str {
        match (self.previous.get(endpoint), field) {
            (Some(e), EndpointField::Path) => &e.path,
            (Some(e), EndpointField::Method) => &e.method,
            (None, _) => "",
        }
    }

    /// Previous document's value for a parameter field, or `""`.
    pub fn parameter_hint(&self, endpoint: usize, position: usize, field: ParameterField) -> &str {
        let Some(p) = self
            .previous
            .get(endpoint)
            .and_then(|e| e.parameters.get(position))
        else {
            return "";
        };
        match field {
            ParameterField::Annotation => &p.annotation,
            ParameterField::Type => &p.r#type,
            ParameterField::Data => &p.data,
        }
    }

    /// The nested endpoint list in entry order.
    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.endpoints
            .iter()
            .map(|record| Endpoint {
                path: record.path.clone(),
                method: record.method.clone(),
                parameters: self
                    .children(record.id)
                    .map(|p| Parameter {
                        annotation: p.annotation.clone(),
                        r#type: p.r#type.clone(),
                        data: p.data.clone(),
                    })
                    .collect(),
            })
            .collect()
    }

    /// Keyed projection of the whole draft.
    pub fn views(&self) -> Vec<EndpointView> {
        self.endpoints
            .iter()
            .map(|record| self.endpoint_record_view(record))
            .collect()
    }

    /// Render keys of the endpoints, in display order.
    pub fn endpoint_ids(&self) -> Vec<EndpointId> {
        self.endpoints.iter().map(|record| record.id).collect()
    }

    /// Projection of the single endpoint at `position`.
    pub fn endpoint_view(&self, position: usize) -> Option<EndpointView> {
        self.endpoints
            .get(position)
            .map(|record| self.endpoint_record_view(record))
    }

    /// Projection of one parameter, without touching its siblings.
    pub fn parameter_view(&self, endpoint: usize, position: usize) -> Option<ParameterView> {
        let slot = self.parameter_slot(endpoint, position)?;
        Some(parameter_record_view(&self.parameters[slot]))
    }

    /// Assemble the create-document payload.
    pub fn to_new_document(
        &self,
        writer: Option<&str>,
        date: String,
    ) -> Result<NewDocument, DraftError> {
        let project_id = self.project_id()?;
        let writer = writer
            .filter(|w| !w.is_empty())
            .ok_or(DraftError::MissingUser)?;
        Ok(NewDocument {
            date,
            project_id,
            writer: writer.to_string(),
            creator: writer.to_string(),
            endpoints: self.endpoints(),
        })
    }

    fn allocate(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn push_parameter(&mut self, endpoint: EndpointId, parameter: Parameter) -> ParameterId {
        let id = ParameterId(self.allocate());
        self.parameters.push(ParameterRecord {
            id,
            endpoint,
            annotation: parameter.annotation,
            r#type: parameter.r#type,
            data: parameter.data,
        });
        id
    }

    fn endpoint_record_view(&self, record: &EndpointRecord) -> EndpointView {
        EndpointView {
            id: record.id,
            path: record.path.clone(),
            method: record.method.clone(),
            parameters: self.children(record.id).map(parameter_record_view).collect(),
        }
    }

    fn children(&self, endpoint: EndpointId) -> impl Iterator<Item = &ParameterRecord> {
        self.parameters.iter().filter(move |p| p.endpoint == endpoint)
    }

    /// Index into `self.parameters` of the `position`-th child of `endpoint`.
    fn parameter_slot(&self, endpoint: usize, position: usize) -> Option<usize> {
        let parent = self.endpoints.get(endpoint)?.id;
        self.parameters
            .iter()
            .enumerate()
            .filter(|(_, p)| p.endpoint == parent)
            .nth(position)
            .map(|(slot, _)| slot)
    }
}

fn parameter_record_view(record: &ParameterRecord) -> ParameterView {
    ParameterView {
        id: record.id,
        annotation: record.annotation.clone(),
        r#type: record.r#type.clone(),
        data: record.data.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(annotation: &str, ty: &str, data: &str) -> Parameter {
        Parameter {
            annotation: annotation.to_string(),
            r#type: ty.to_string(),
            data: data.to_string(),
        }
    }

    fn previous_endpoints() -> Vec<Endpoint> {
        vec![
            Endpoint {
                path: "/users".to_string(),
                method: "GET".to_string(),
                parameters: vec![param("@RequestParam", "String", "name")],
            },
            Endpoint {
                path: "/users".to_string(),
                method: "POST".to_string(),
                parameters: vec![
                    param("@RequestBody", "UserDto", "{\"name\":\"a\"}"),
                    param("@RequestHeader", "String", "Authorization"),
                ],
            },
        ]
    }

    #[test]
    fn test_new_draft_shape() {
        let draft = DocumentDraft::new(Some("7"));
        assert_eq!(draft.project_id(), Ok(7));
        assert_eq!(draft.phase(), FormPhase::Initializing);
        assert_eq!(draft.endpoints(), vec![Endpoint::blank()]);
    }

    #[test]
    fn test_parse_project_id() {
        assert_eq!(parse_project_id(Some("12")), Ok(12));
        assert_eq!(parse_project_id(Some(" 3 ")), Ok(3));
        assert_eq!(parse_project_id(None), Err(DraftError::MissingProjectId));
        assert_eq!(parse_project_id(Some("")), Err(DraftError::MissingProjectId));
        assert_eq!(
            parse_project_id(Some("0")),
            Err(DraftError::InvalidProjectId("0".to_string()))
        );
        assert_eq!(
            parse_project_id(Some("-4")),
            Err(DraftError::InvalidProjectId("-4".to_string()))
        );
        assert_eq!(
            parse_project_id(Some("abc")),
            Err(DraftError::InvalidProjectId("abc".to_string()))
        );
    }

    #[test]
    fn test_invalid_project_id_still_renders() {
        let draft = DocumentDraft::new(Some("nope"));
        assert!(draft.project_id().is_err());
        assert_eq!(draft.endpoint_count(), 1);
        assert_eq!(draft.parameter_count(0), 1);
    }

    #[test]
    fn test_endpoint_list_never_empties() {
        let mut draft = DocumentDraft::new(Some("1"));
        // Deterministic mix of adds and removes at varying positions.
        for step in 0..200usize {
            if step % 3 == 0 {
                draft.add_endpoint();
            } else {
                let len = draft.endpoint_count();
                draft.remove_endpoint(step % (len + 1));
            }
            assert!(draft.endpoint_count() >= 1, "step {step}");
        }
        while draft.endpoint_count() > 1 {
            assert!(draft.remove_endpoint(0));
        }
        assert!(!draft.can_remove_endpoint());
        assert!(!draft.remove_endpoint(0));
        assert_eq!(draft.endpoint_count(), 1);
    }

    #[test]
    fn test_parameter_list_never_empties() {
        let mut draft = DocumentDraft::new(Some("1"));
        draft.add_endpoint();
        for step in 0..200usize {
            if step % 4 == 0 {
                draft.add_parameter(1);
            } else {
                let len = draft.parameter_count(1);
                draft.remove_parameter(1, step % (len + 1));
            }
            assert!(draft.parameter_count(1) >= 1, "step {step}");
        }
        while draft.parameter_count(1) > 1 {
            assert!(draft.remove_parameter(1, 0));
        }
        assert!(!draft.remove_parameter(1, 0));
        assert_eq!(draft.parameter_count(1), 1);
        // The other endpoint is unaffected.
        assert_eq!(draft.parameter_count(0), 1);
    }

    #[test]
    fn test_remove_endpoint_drops_its_parameters() {
        let mut draft = DocumentDraft::new(Some("1"));
        draft.add_endpoint();
        draft.add_parameter(1);
        draft.add_parameter(1);
        assert_eq!(draft.parameter_count(1), 3);

        assert!(draft.remove_endpoint(1));
        assert_eq!(draft.endpoint_count(), 1);
        assert_eq!(draft.parameters.len(), 1);
    }

    #[test]
    fn test_edit_method_leaves_siblings_untouched() {
        let mut draft = DocumentDraft::new(Some("1"));
        draft.add_endpoint();
        draft.add_endpoint();
        draft.set_endpoint_field(0, EndpointField::Path, "/a");
        draft.set_endpoint_field(2, EndpointField::Path, "/c");
        let before = draft.views();

        assert!(draft.set_endpoint_field(1, EndpointField::Method, "DELETE"));

        let after = draft.views();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert_eq!(after[1].id, before[1].id);
        assert_eq!(after[1].method, "DELETE");
        assert_eq!(after[1].parameters, before[1].parameters);
    }

    #[test]
    fn test_edit_parameter_targets_one_record() {
        let mut draft = DocumentDraft::new(Some("1"));
        draft.add_endpoint();
        draft.add_parameter(0);
        draft.add_parameter(1);

        assert!(draft.set_parameter_field(1, 1, ParameterField::Type, "Long"));
        assert!(draft.set_parameter_field(0, 1, ParameterField::Data, "id"));

        let endpoints = draft.endpoints();
        assert_eq!(endpoints[0].parameters[0], Parameter::default());
        assert_eq!(endpoints[0].parameters[1].data, "id");
        assert_eq!(endpoints[1].parameters[0], Parameter::default());
        assert_eq!(endpoints[1].parameters[1].r#type, "Long");
    }

    #[test]
    fn test_out_of_range_edits_are_rejected() {
        let mut draft = DocumentDraft::new(Some("1"));
        assert!(!draft.set_endpoint_field(4, EndpointField::Path, "/x"));
        assert!(!draft.set_parameter_field(0, 4, ParameterField::Data, "x"));
        assert!(draft.add_parameter(9).is_none());
        assert_eq!(draft.parameter_count(9), 0);
    }

    #[test]
    fn test_single_record_projections() {
        let mut draft = DocumentDraft::new(Some("1"));
        draft.add_endpoint();
        draft.set_endpoint_field(1, EndpointField::Path, "/orders");
        draft.add_parameter(1);
        draft.set_parameter_field(1, 1, ParameterField::Type, "Long");

        let all = draft.views();
        let ids = draft.endpoint_ids();
        assert_eq!(ids, all.iter().map(|v| v.id).collect::<Vec<_>>());

        assert_eq!(draft.endpoint_view(1).as_ref(), Some(&all[1]));
        assert_eq!(draft.endpoint_view(0).unwrap().parameters.len(), 1);
        assert_eq!(draft.endpoint_view(2), None);

        let parameter = draft.parameter_view(1, 1).unwrap();
        assert_eq!(parameter, all[1].parameters[1]);
        assert_eq!(parameter.r#type, "Long");
        assert_eq!(draft.parameter_view(1, 2), None);
        assert_eq!(draft.parameter_view(5, 0), None);
    }

    #[test]
    fn test_ids_stay_stable_across_removals() {
        let mut draft = DocumentDraft::new(Some("1"));
        draft.add_endpoint();
        draft.add_endpoint();
        let ids: Vec<EndpointId> = draft.views().iter().map(|v| v.id).collect();

        draft.remove_endpoint(0);
        let remaining: Vec<EndpointId> = draft.views().iter().map(|v| v.id).collect();
        assert_eq!(remaining, ids[1..].to_vec());

        let fresh = draft.add_endpoint();
        assert!(!ids.contains(&fresh));
    }

    #[test]
    fn test_load_previous_copies_every_field() {
        let mut draft = DocumentDraft::new(Some("1"));
        let previous = previous_endpoints();

        assert!(draft.load_previous(&previous));
        assert_eq!(draft.endpoints(), previous);
        assert_eq!(draft.endpoint_hint(1, EndpointField::Method), "POST");
        assert_eq!(draft.parameter_hint(1, 1, ParameterField::Data), "Authorization");
        assert_eq!(draft.parameter_hint(5, 0, ParameterField::Data), "");

        // Editing the draft does not write through to the source document.
        draft.set_endpoint_field(0, EndpointField::Path, "/accounts");
        assert_eq!(previous[0].path, "/users");
    }

    #[test]
    fn test_load_previous_pads_empty_parameter_lists() {
        let mut draft = DocumentDraft::new(Some("1"));
        let previous = vec![Endpoint {
            path: "/ping".to_string(),
            method: "GET".to_string(),
            parameters: Vec::new(),
        }];
        assert!(draft.load_previous(&previous));
        assert_eq!(draft.parameter_count(0), 1);
    }

    #[test]
    fn test_load_previous_ignores_empty_and_late_documents() {
        let mut draft = DocumentDraft::new(Some("1"));
        assert!(!draft.load_previous(&[]));
        assert_eq!(draft.endpoints(), vec![Endpoint::blank()]);

        draft.mark_ready();
        assert!(!draft.load_previous(&previous_endpoints()));
        assert_eq!(draft.endpoints(), vec![Endpoint::blank()]);
    }

    #[test]
    fn test_submit_phases() {
        let mut draft = DocumentDraft::new(Some("1"));
        assert!(!draft.begin_submit());

        draft.mark_ready();
        assert!(draft.begin_submit());
        assert_eq!(draft.phase(), FormPhase::Submitting);
        assert!(!draft.begin_submit());

        draft.finish_submit(false);
        assert_eq!(draft.phase(), FormPhase::Ready);

        assert!(draft.begin_submit());
        draft.finish_submit(true);
        assert_eq!(draft.phase(), FormPhase::Submitted);
        assert!(!draft.begin_submit());
    }

    #[test]
    fn test_to_new_document_in_entry_order() {
        let mut draft = DocumentDraft::new(Some("5"));
        draft.set_endpoint_field(0, EndpointField::Method, "GET");
        draft.set_endpoint_field(0, EndpointField::Path, "/users");
        draft.add_endpoint();
        draft.set_endpoint_field(1, EndpointField::Method, "POST");
        draft.set_endpoint_field(1, EndpointField::Path, "/users");
        draft.set_parameter_field(1, 0, ParameterField::Annotation, "first");
        draft.add_parameter(1);
        draft.set_parameter_field(1, 1, ParameterField::Annotation, "second");

        let payload = draft
            .to_new_document(Some("alice"), "2024-01-01T00:00:00.000Z".to_string())
            .unwrap();
        assert_eq!(payload.project_id, 5);
        assert_eq!(payload.writer, "alice");
        assert_eq!(payload.creator, "alice");
        assert_eq!(payload.endpoints.len(), 2);
        assert_eq!(payload.endpoints[0].method, "GET");
        assert_eq!(payload.endpoints[1].method, "POST");
        let annotations: Vec<&str> = payload.endpoints[1]
            .parameters
            .iter()
            .map(|p| p.annotation.as_str())
            .collect();
        assert_eq!(annotations, vec!["first", "second"]);
    }

    #[test]
    fn test_to_new_document_validation() {
        let draft = DocumentDraft::new(None);
        assert_eq!(
            draft.to_new_document(Some("alice"), String::new()),
            Err(DraftError::MissingProjectId)
        );

        let draft = DocumentDraft::new(Some("2"));
        assert_eq!(
            draft.to_new_document(None, String::new()),
            Err(DraftError::MissingUser)
        );
        assert_eq!(
            draft.to_new_document(Some(""), String::new()),
            Err(DraftError::MissingUser)
        );
    }
}
