//! In-memory form: containers of named inputs, standing in for the page markup.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::FieldDescriptor;

pub const ERROR_CLASS: &str = "error";
const ONTOLOGY_REL_MARKER: &str = "ontology";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Hidden,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Input {
    pub name: String,
    pub kind: InputKind,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<String>,
    #[serde(skip_serializing_if = "BTreeSet::is_empty")]
    pub classes: BTreeSet<String>,
}

impl Input {
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Text,
            value: String::new(),
            rel: None,
            classes: BTreeSet::new(),
        }
    }

    pub fn hidden(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self { value: value.into(), kind: InputKind::Hidden, ..Self::text(name) }
    }

    pub fn with_rel(mut self, rel: impl Into<String>) -> Self {
        self.rel = Some(rel.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}

/// The element wrapping a group of inputs. Companion fields are looked up here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Container {
    pub inputs: Vec<Input>,
}

impl Container {
    pub fn position(&self, name: &str) -> Option<usize> {
        self.inputs.iter().position(|input| input.name == name)
    }

    pub fn find(&self, name: &str) -> Option<&Input> {
        self.inputs.iter().find(|input| input.name == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Input> {
        self.inputs.iter_mut().find(|input| input.name == name)
    }
}

/// Addresses an input by container and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldHandle {
    pub container: usize,
    pub name: String,
}

impl FieldHandle {
    pub fn new(container: usize, name: impl Into<String>) -> Self {
        Self { container, name: name.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Form {
    pub containers: Vec<Container>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// One container per descriptor, each holding the visible field.
    pub fn from_descriptors(descriptors: &[FieldDescriptor]) -> Self {
        let mut form = Form::new();
        for descriptor in descriptors {
            let container = form.add_container();
            form.push_input(container, Input::text(&descriptor.name).with_rel(&descriptor.rel));
        }
        form
    }

    pub fn add_container(&mut self) -> usize {
        self.containers.push(Container::default());
        self.containers.len() - 1
    }

    /// Appends to `container`, creating containers up to that index if needed.
    pub fn push_input(&mut self, container: usize, input: Input) -> FieldHandle {
        while self.containers.len() <= container {
            self.add_container();
        }
        let handle = FieldHandle::new(container, &input.name);
        self.containers[container].inputs.push(input);
        handle
    }

    pub fn container(&self, index: usize) -> Option<&Container> {
        self.containers.get(index)
    }

    pub fn container_mut(&mut self, index: usize) -> Option<&mut Container> {
        self.containers.get_mut(index)
    }

    pub fn get(&self, handle: &FieldHandle) -> Option<&Input> {
        self.container(handle.container)?.find(&handle.name)
    }

    pub fn get_mut(&mut self, handle: &FieldHandle) -> Option<&mut Input> {
        self.container_mut(handle.container)?.find_mut(&handle.name)
    }

    pub fn value(&self, handle: &FieldHandle) -> Option<&str> {
        self.get(handle).map(|input| input.value.as_str())
    }

    pub fn set_value(&mut self, handle: &FieldHandle, value: impl Into<String>) -> bool {
        match self.get_mut(handle) {
            Some(input) => {
                input.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn add_class(&mut self, handle: &FieldHandle, class: &str) {
        if let Some(input) = self.get_mut(handle) {
            input.classes.insert(class.to_string());
        }
    }

    pub fn remove_class(&mut self, handle: &FieldHandle, class: &str) {
        if let Some(input) = self.get_mut(handle) {
            input.classes.remove(class);
        }
    }

    pub fn has_class(&self, handle: &FieldHandle, class: &str) -> bool {
        self.get(handle).is_some_and(|input| input.classes.contains(class))
    }

    /// Visible inputs whose `rel` mentions `ontology`, in document order.
    pub fn ontology_fields(&self) -> Vec<(FieldHandle, String)> {
        self.containers
            .iter()
            .enumerate()
            .flat_map(|(idx, container)| {
                container.inputs.iter().filter_map(move |input| match &input.rel {
                    Some(rel) if input.kind == InputKind::Text && rel.contains(ONTOLOGY_REL_MARKER) => {
                        Some((FieldHandle::new(idx, &input.name), rel.clone()))
                    }
                    _ => None,
                })
            })
            .collect()
    }
}
