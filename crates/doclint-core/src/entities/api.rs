use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entities::member::{Member, MemberCollection};
use crate::enums::{ApiType, Collection};
use crate::report::{RecordValidator, Verdict};
use crate::slug::{SlugAliases, UrlTemplates};

/// Which processes an API is available in. Both false until a notice asserts otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    pub main: bool,
    pub renderer: bool,
}

/// One documented module or class.
///
/// Built once by [`ApiBuilder::build`] and read-only afterwards. The error list is
/// computed during the build and never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Api {
    name: String,
    slug: String,
    #[serde(rename = "type")]
    kind: ApiType,
    version: String,
    description: String,
    process: Process,
    website_url: String,
    repo_url: String,
    #[serde(skip_serializing_if = "MemberCollection::is_empty")]
    methods: MemberCollection,
    #[serde(skip_serializing_if = "MemberCollection::is_empty")]
    static_methods: MemberCollection,
    #[serde(skip_serializing_if = "MemberCollection::is_empty")]
    instance_methods: MemberCollection,
    #[serde(skip_serializing_if = "MemberCollection::is_empty")]
    instance_properties: MemberCollection,
    #[serde(skip_serializing_if = "MemberCollection::is_empty")]
    events: MemberCollection,
    #[serde(skip_serializing_if = "MemberCollection::is_empty")]
    instance_events: MemberCollection,
    #[serde(skip)]
    collection_errors: Vec<String>,
}

impl Api {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    #[must_use]
    pub const fn kind(&self) -> ApiType {
        self.kind
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub const fn process(&self) -> Process {
        self.process
    }

    #[must_use]
    pub fn website_url(&self) -> &str {
        &self.website_url
    }

    #[must_use]
    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }

    #[must_use]
    pub const fn collection(&self, collection: Collection) -> &MemberCollection {
        match collection {
            Collection::Methods => &self.methods,
            Collection::StaticMethods => &self.static_methods,
            Collection::InstanceMethods => &self.instance_methods,
            Collection::InstanceProperties => &self.instance_properties,
            Collection::Events => &self.events,
            Collection::InstanceEvents => &self.instance_events,
        }
    }

    #[must_use]
    pub const fn methods(&self) -> &MemberCollection {
        &self.methods
    }

    #[must_use]
    pub const fn static_methods(&self) -> &MemberCollection {
        &self.static_methods
    }

    #[must_use]
    pub const fn instance_methods(&self) -> &MemberCollection {
        &self.instance_methods
    }

    #[must_use]
    pub const fn instance_properties(&self) -> &MemberCollection {
        &self.instance_properties
    }

    #[must_use]
    pub const fn events(&self) -> &MemberCollection {
        &self.events
    }

    #[must_use]
    pub const fn instance_events(&self) -> &MemberCollection {
        &self.instance_events
    }

    /// Baseline entry for a later translation check.
    #[must_use]
    pub fn summary(&self) -> ApiSummary {
        ApiSummary {
            name: self.name.clone(),
            slug: self.slug.clone(),
            kind: self.kind,
            version: self.version.clone(),
        }
    }

    fn collection_mut(&mut self, collection: Collection) -> &mut MemberCollection {
        match collection {
            Collection::Methods => &mut self.methods,
            Collection::StaticMethods => &mut self.static_methods,
            Collection::InstanceMethods => &mut self.instance_methods,
            Collection::InstanceProperties => &mut self.instance_properties,
            Collection::Events => &mut self.events,
            Collection::InstanceEvents => &mut self.instance_events,
        }
    }
}

impl Verdict for Api {
    fn report_name(&self) -> &str {
        &self.name
    }

    fn collection_errors(&self) -> &[String] {
        &self.collection_errors
    }
}

// ---------------------------------------------------------------------------
// ApiBuilder
// ---------------------------------------------------------------------------

/// Explicit builder for [`Api`]. Every accepted field is declared here; derived
/// fields (slug, URLs, errors) are computed by [`ApiBuilder::build`].
#[derive(Debug, Clone)]
pub struct ApiBuilder {
    name: String,
    kind: ApiType,
    version: String,
    description: String,
    process: Process,
    members: BTreeMap<Collection, MemberCollection>,
    defects: Vec<String>,
}

impl ApiBuilder {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ApiType, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            version: version.into(),
            description: String::new(),
            process: Process::default(),
            members: BTreeMap::new(),
            defects: Vec::new(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn process(mut self, process: Process) -> Self {
        self.process = process;
        self
    }

    /// Add a member to a collection. A second member with the same name is not
    /// added; it is recorded as a defect instead.
    pub fn member(&mut self, collection: Collection, member: Member) -> &mut Self {
        let members = self.members.entry(collection).or_default();
        if members.contains(&member.name) {
            self.defects.push(format!(
                "duplicate {} member '{}'",
                collection.key(),
                member.name
            ));
        } else {
            members.push(member);
        }
        self
    }

    /// Record a structural defect found while extracting this API.
    pub fn defect(&mut self, message: impl Into<String>) -> &mut Self {
        self.defects.push(message.into());
        self
    }

    #[must_use]
    pub fn defects(&self) -> &[String] {
        &self.defects
    }

    /// Derive slug and URLs, validate the serialized record, and freeze it.
    ///
    /// The error list is the extraction defects followed by the validator's
    /// violations.
    #[must_use]
    pub fn build(
        self,
        aliases: &SlugAliases,
        urls: &UrlTemplates,
        validator: &dyn RecordValidator,
    ) -> Api {
        let slug = aliases.slug_for(&self.name);
        let website_url = urls.website_url(&slug);
        let repo_url = urls.repo_url(&self.version, &slug);

        let mut api = Api {
            name: self.name,
            slug,
            kind: self.kind,
            version: self.version,
            description: self.description,
            process: self.process,
            website_url,
            repo_url,
            methods: MemberCollection::default(),
            static_methods: MemberCollection::default(),
            instance_methods: MemberCollection::default(),
            instance_properties: MemberCollection::default(),
            events: MemberCollection::default(),
            instance_events: MemberCollection::default(),
            collection_errors: Vec::new(),
        };
        for (collection, members) in self.members {
            *api.collection_mut(collection) = members;
        }

        let mut errors = self.defects;
        match serde_json::to_value(&api) {
            Ok(record) => errors.extend(validator.violations(&record)),
            Err(error) => errors.push(format!("record could not be serialized: {error}")),
        }
        api.collection_errors = errors;
        api
    }
}

// ---------------------------------------------------------------------------
// ApiSummary
// ---------------------------------------------------------------------------

/// The part of a persisted API record a translation check needs. Extra fields in
/// the persisted file are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ApiSummary {
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: ApiType,
    pub version: String,
}
