//! The GPT-2 parameter dictionary and its JSON form.

use std::fmt;

use ndarray::{ArrayD, ArrayViewD, Axis};
use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::bundle::BundleReader;
use crate::error::{Error, Result};

/// Architecture metadata (`hparams.json`), passed through untouched.
pub type Settings = Map<String, Value>;

/// One node of the parameter dictionary.
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    /// Numeric tensor, written as nested lists.
    Array(ArrayD<f32>),
    /// Anything else, written as-is.
    Value(Value),
    Map(ParamDict),
    List(Vec<Param>),
}

impl Param {
    pub fn as_array(&self) -> Option<&ArrayD<f32>> {
        match self {
            Param::Array(array) => Some(array),
            _ => None,
        }
    }
}

impl From<ArrayD<f32>> for Param {
    fn from(array: ArrayD<f32>) -> Self {
        Param::Array(array)
    }
}

impl From<Value> for Param {
    fn from(value: Value) -> Self {
        Param::Value(value)
    }
}

impl From<ParamDict> for Param {
    fn from(dict: ParamDict) -> Self {
        Param::Map(dict)
    }
}

/// String-keyed map that keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamDict {
    entries: Vec<(String, Param)>,
}

impl ParamDict {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Param)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn get(&self, key: &str) -> Option<&Param> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Param> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    /// Insert or replace. A replaced key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Param>) {
        let key = key.into();
        let value = value.into();
        match self.get_mut(&key) {
            Some(slot) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// The value under `key`, inserting `default()` first if absent.
    pub fn entry_or_insert_with(
        &mut self,
        key: &str,
        default: impl FnOnce() -> Param,
    ) -> &mut Param {
        let index = match self.entries.iter().position(|(k, _)| k == key) {
            Some(index) => index,
            None => {
                self.entries.push((key.to_string(), default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }
}

impl fmt::Display for ParamDict {
    /// Renders the key list, e.g. `["blocks", "b", "g", "wpe", "wte"]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.keys()).finish()
    }
}

/// What a loader hands to the exporter.
#[derive(Debug, Clone, PartialEq)]
pub struct Checkpoint {
    pub settings: Settings,
    pub params: ParamDict,
}

/// Nested-list view of a tensor; a 0-d tensor is a bare number.
struct NestedList<'a>(ArrayViewD<'a, f32>);

impl Serialize for NestedList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.0.ndim() == 0 {
            let value = self.0.iter().next().copied().unwrap_or_default();
            if !value.is_finite() {
                return Err(S::Error::custom(format!(
                    "{} is not representable in JSON",
                    value
                )));
            }
            return serializer.serialize_f32(value);
        }

        let mut seq = serializer.serialize_seq(Some(self.0.len_of(Axis(0))))?;
        if self.0.ndim() == 1 {
            for value in self.0.iter() {
                if !value.is_finite() {
                    return Err(S::Error::custom(format!(
                        "{} is not representable in JSON",
                        value
                    )));
                }
                seq.serialize_element(value)?;
            }
        } else {
            for row in self.0.outer_iter() {
                seq.serialize_element(&NestedList(row))?;
            }
        }
        seq.end()
    }
}

impl Serialize for Param {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Param::Array(array) => NestedList(array.view()).serialize(serializer),
            Param::Value(value) => value.serialize(serializer),
            Param::Map(dict) => dict.serialize(serializer),
            Param::List(items) => items.serialize(serializer),
        }
    }
}

impl Serialize for ParamDict {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Remove every axis of length 1.
pub fn squeeze(array: ArrayD<f32>) -> ArrayD<f32> {
    let mut array = array;
    let mut axis = array.ndim();
    while axis > 0 {
        axis -= 1;
        if array.len_of(Axis(axis)) == 1 {
            array = array.index_axis_move(Axis(axis), 0);
        }
    }
    array
}

/// Upper bound on transformer blocks; the largest release has 48.
pub const MAX_BLOCKS: usize = 1024;

/// Parse `h12` into `12`.
fn block_index(component: &str) -> Option<usize> {
    component.strip_prefix('h')?.parse().ok()
}

fn expect_map<'a>(param: &'a mut Param, path: &str) -> Result<&'a mut ParamDict> {
    match param {
        Param::Map(dict) => Ok(dict),
        _ => Err(Error::ParamLayout(format!(
            "variable {} nests under a non-dictionary value",
            path
        ))),
    }
}

/// Place `value` into `params` following a TF variable name such as
/// `model/h3/attn/c_attn/w` (which lands at `blocks[3].attn.c_attn.w`) or
/// `model/ln_f/g` (which lands at `g`).
pub fn insert_variable(params: &mut ParamDict, name: &str, value: ArrayD<f32>) -> Result<()> {
    let parts: Vec<&str> = name.split('/').skip(1).collect();
    let Some((last, parents)) = parts.split_last() else {
        return Err(Error::ParamLayout(format!(
            "variable name {:?} has no components",
            name
        )));
    };

    // The first component is either a block (`h3`) or a scope that is
    // dropped, so `model/ln_f/g` lands at the top-level `g`.
    let mut target = params;
    let mut parents = parents;
    if let Some((first, rest)) = parents.split_first() {
        parents = rest;
        if let Some(index) = block_index(first) {
            let blocks = target.entry_or_insert_with("blocks", || Param::List(Vec::new()));
            let Param::List(blocks) = blocks else {
                return Err(Error::ParamLayout("`blocks` is not a list".into()));
            };
            if index >= MAX_BLOCKS {
                return Err(Error::CheckpointState(format!(
                    "variable {} names block {}, above the limit of {}",
                    name, index, MAX_BLOCKS
                )));
            }
            if blocks.len() <= index {
                blocks.resize_with(index + 1, || Param::Map(ParamDict::new()));
            }
            target = expect_map(&mut blocks[index], name)?;
        }
    }

    for key in parents {
        let child = target.entry_or_insert_with(key, || Param::Map(ParamDict::new()));
        target = expect_map(child, name)?;
    }
    target.insert(*last, value);
    Ok(())
}

/// Build the parameter dictionary from every variable in `reader`.
pub fn load_params(reader: &BundleReader, settings: &Settings) -> Result<ParamDict> {
    let mut params = ParamDict::new();
    let n_layer = settings
        .get("n_layer")
        .and_then(Value::as_u64)
        .unwrap_or(0);
    if n_layer > MAX_BLOCKS as u64 {
        return Err(Error::CheckpointState(format!(
            "n_layer {} is above the limit of {}",
            n_layer, MAX_BLOCKS
        )));
    }
    let n_layer = n_layer as usize;
    params.insert(
        "blocks",
        Param::List(vec![Param::Map(ParamDict::new()); n_layer]),
    );

    for name in reader.variables() {
        let array = squeeze(reader.read_tensor(name)?);
        debug!("Loaded {} with shape {:?}", name, array.shape());
        insert_variable(&mut params, name, array)?;
    }
    Ok(params)
}
