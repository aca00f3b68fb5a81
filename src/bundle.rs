//! TensorFlow V2 checkpoint ("tensor bundle") reader.
//!
//! A checkpoint with prefix `model.ckpt` consists of `model.ckpt.index`, a
//! table mapping tensor names to `BundleEntryProto`s, and one or more
//! `model.ckpt.data-NNNNN-of-NNNNN` shards holding the raw little-endian
//! tensor bytes.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use ndarray::{ArrayD, IxDyn};
use protobuf::Message;
use tracing::debug;

use crate::crc;
use crate::error::{Error, Result};
use crate::protomodels::tensor_bundle::bundle_header_proto::Endianness;
use crate::protomodels::tensor_bundle::{BundleEntryProto, BundleHeaderProto, DataType};
use crate::table::Table;

/// Name of the file recording the most recent checkpoint of a directory.
pub const CHECKPOINT_STATE_FILE: &str = "checkpoint";

/// Resolve the checkpoint prefix named by `<model_dir>/checkpoint`.
///
/// The file is a text proto; only `model_checkpoint_path` is read.
pub fn latest_checkpoint(model_dir: &Path) -> Result<PathBuf> {
    let state = std::fs::read_to_string(model_dir.join(CHECKPOINT_STATE_FILE))?;
    let path = state
        .lines()
        .filter_map(|line| line.trim().strip_prefix("model_checkpoint_path:"))
        .map(|value| value.trim().trim_matches('"'))
        .next()
        .ok_or_else(|| Error::CheckpointState("no model_checkpoint_path entry".into()))?;
    if path.is_empty() {
        return Err(Error::CheckpointState("empty model_checkpoint_path".into()));
    }

    let path = Path::new(path);
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(model_dir.join(path))
    }
}

pub struct BundleReader {
    prefix: PathBuf,
    num_shards: i32,
    names: Vec<String>,
    entries: HashMap<String, BundleEntryProto>,
}

impl BundleReader {
    pub fn open(prefix: impl AsRef<Path>) -> Result<Self> {
        let prefix = prefix.as_ref().to_path_buf();
        let index_path = with_suffix(&prefix, ".index");
        let table = Table::open(std::fs::read(&index_path)?)?;

        let mut header = None;
        let mut names = Vec::new();
        let mut entries = HashMap::new();
        for (key, value) in table.entries()? {
            if key.is_empty() {
                header = Some(BundleHeaderProto::parse_from_bytes(&value)?);
                continue;
            }
            let name = String::from_utf8(key)
                .map_err(|_| Error::Table("tensor name is not valid UTF-8".into()))?;
            entries.insert(name.clone(), BundleEntryProto::parse_from_bytes(&value)?);
            names.push(name);
        }

        let header = header.ok_or_else(|| Error::Table("missing bundle header".into()))?;
        if header.endianness.enum_value() != Ok(Endianness::LITTLE) {
            return Err(Error::BigEndianBundle);
        }
        debug!(
            "Opened {} with {} tensors in {} shard(s)",
            index_path.display(),
            names.len(),
            header.num_shards
        );

        Ok(BundleReader {
            prefix,
            num_shards: header.num_shards,
            names,
            entries,
        })
    }

    /// Tensor names in index order.
    pub fn variables(&self) -> &[String] {
        &self.names
    }

    pub fn shard_path(&self, shard_id: i32) -> PathBuf {
        with_suffix(
            &self.prefix,
            &format!(".data-{:05}-of-{:05}", shard_id, self.num_shards),
        )
    }

    fn entry(&self, name: &str) -> Result<&BundleEntryProto> {
        self.entries
            .get(name)
            .ok_or_else(|| Error::MissingTensor(name.to_string()))
    }

    /// Dimension sizes as stored, before any squeezing.
    pub fn shape(&self, name: &str) -> Result<Vec<usize>> {
        let entry = self.entry(name)?;
        let Some(shape) = entry.shape.0.as_deref() else {
            return Ok(Vec::new());
        };
        if shape.unknown_rank {
            return Err(Error::Table(format!("tensor {} has unknown rank", name)));
        }
        shape
            .dim
            .iter()
            .map(|dim| {
                usize::try_from(dim.size).map_err(|_| {
                    Error::Table(format!("tensor {} has dimension of size {}", name, dim.size))
                })
            })
            .collect()
    }

    /// Read one tensor, verifying its checksum and widening it to `f32`.
    pub fn read_tensor(&self, name: &str) -> Result<ArrayD<f32>> {
        let entry = self.entry(name)?;
        let shape = self.shape(name)?;

        let offset = u64::try_from(entry.offset)
            .map_err(|_| Error::Table(format!("tensor {} has offset {}", name, entry.offset)))?;
        let size = usize::try_from(entry.size)
            .map_err(|_| Error::Table(format!("tensor {} has size {}", name, entry.size)))?;

        let mut bytes = vec![0u8; size];
        {
            let mut shard = File::open(self.shard_path(entry.shard_id))?;
            shard.seek(SeekFrom::Start(offset))?;
            shard.read_exact(&mut bytes)?;
        }

        let expected = crc::unmask(entry.crc32c);
        let actual = crc32c::crc32c(&bytes);
        if expected != actual {
            return Err(Error::ChecksumMismatch {
                what: format!("tensor {}", name),
                expected,
                actual,
            });
        }

        let values = decode_values(name, entry, &bytes)?;
        Ok(ArrayD::from_shape_vec(IxDyn(&shape), values)?)
    }
}

fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut path = prefix.as_os_str().to_owned();
    path.push(suffix);
    PathBuf::from(path)
}

fn le_bytes<const N: usize>(chunk: &[u8]) -> [u8; N] {
    let mut out = [0u8; N];
    out.copy_from_slice(chunk);
    out
}

fn decode_values(name: &str, entry: &BundleEntryProto, bytes: &[u8]) -> Result<Vec<f32>> {
    let unsupported = |dtype: String| Error::UnsupportedDtype {
        name: name.to_string(),
        dtype,
    };
    let dtype = entry
        .dtype
        .enum_value()
        .map_err(|value| unsupported(format!("enum value {}", value)))?;

    let width = match dtype {
        DataType::DT_FLOAT => 4,
        DataType::DT_DOUBLE => 8,
        DataType::DT_HALF | DataType::DT_BFLOAT16 => 2,
        other => return Err(unsupported(format!("{:?}", other))),
    };
    if bytes.len() % width != 0 {
        return Err(Error::Table(format!(
            "tensor {} holds {} bytes, not a multiple of {}",
            name,
            bytes.len(),
            width
        )));
    }

    let chunks = bytes.chunks_exact(width);
    let values = match dtype {
        DataType::DT_FLOAT => chunks.map(|c| f32::from_le_bytes(le_bytes(c))).collect(),
        DataType::DT_DOUBLE => chunks
            .map(|c| f64::from_le_bytes(le_bytes(c)) as f32)
            .collect(),
        DataType::DT_HALF => chunks
            .map(|c| half::f16::from_le_bytes(le_bytes(c)).to_f32())
            .collect(),
        _ => chunks
            .map(|c| half::bf16::from_le_bytes(le_bytes(c)).to_f32())
            .collect(),
    };
    Ok(values)
}

/// Writes small single-shard checkpoints for tests.
#[cfg(test)]
pub(crate) mod fixture {
    use std::collections::BTreeMap;
    use std::path::Path;

    use protobuf::{Message, MessageField};

    use super::*;
    use crate::protomodels::tensor_bundle::{tensor_shape_proto, TensorShapeProto};
    use crate::table::builder;

    pub struct FixtureTensor<'a> {
        pub name: &'a str,
        pub shape: &'a [usize],
        pub dtype: DataType,
        /// Raw little-endian element bytes
        pub bytes: Vec<u8>,
    }

    impl<'a> FixtureTensor<'a> {
        pub fn f32s(name: &'a str, shape: &'a [usize], values: &[f32]) -> Self {
            FixtureTensor {
                name,
                shape,
                dtype: DataType::DT_FLOAT,
                bytes: values.iter().flat_map(|v| v.to_le_bytes()).collect(),
            }
        }
    }

    /// Write `<dir>/model.ckpt.{index,data-00000-of-00001}` and the
    /// `checkpoint` state file. Returns the prefix.
    pub fn write_checkpoint(dir: &Path, tensors: &[FixtureTensor<'_>]) -> PathBuf {
        write_checkpoint_with_endianness(dir, tensors, Endianness::LITTLE)
    }

    pub fn write_checkpoint_with_endianness(
        dir: &Path,
        tensors: &[FixtureTensor<'_>],
        endianness: Endianness,
    ) -> PathBuf {
        let prefix = dir.join("model.ckpt");
        let mut data = Vec::new();
        let mut index = BTreeMap::new();

        let mut header = BundleHeaderProto::new();
        header.num_shards = 1;
        header.endianness = endianness.into();
        index.insert(Vec::new(), header.write_to_bytes().unwrap());

        for tensor in tensors {
            let mut shape = TensorShapeProto::new();
            for &size in tensor.shape {
                let mut dim = tensor_shape_proto::Dim::new();
                dim.size = size as i64;
                shape.dim.push(dim);
            }

            let mut entry = BundleEntryProto::new();
            entry.dtype = tensor.dtype.into();
            entry.shape = MessageField::some(shape);
            entry.shard_id = 0;
            entry.offset = data.len() as i64;
            entry.size = tensor.bytes.len() as i64;
            entry.crc32c = crc::mask(crc32c::crc32c(&tensor.bytes));
            data.extend_from_slice(&tensor.bytes);

            index.insert(
                tensor.name.as_bytes().to_vec(),
                entry.write_to_bytes().unwrap(),
            );
        }

        let entries: Vec<_> = index.into_iter().collect();
        std::fs::write(with_suffix(&prefix, ".index"), builder::build(&entries)).unwrap();
        std::fs::write(with_suffix(&prefix, ".data-00000-of-00001"), data).unwrap();
        std::fs::write(
            dir.join(CHECKPOINT_STATE_FILE),
            "model_checkpoint_path: \"model.ckpt\"\nall_model_checkpoint_paths: \"model.ckpt\"\n",
        )
        .unwrap();
        prefix
    }
}
