// This file is generated by rust-protobuf 3.7.2. Do not edit
// .proto file is parsed by pure
// @generated

// https://github.com/rust-lang/rust-clippy/issues/702
#![allow(unknown_lints)]
#![allow(clippy::all)]

#![allow(unused_attributes)]
#![cfg_attr(rustfmt, rustfmt::skip)]

#![allow(dead_code)]
#![allow(missing_docs)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(trivial_casts)]
#![allow(unused_results)]
#![allow(unused_mut)]

//! Generated file from `tensor_bundle.proto`

/// Generated files are compatible only with the same version
/// of protobuf runtime.
const _PROTOBUF_VERSION_CHECK: () = ::protobuf::VERSION_3_7_2;

// @@protoc_insertion_point(message:tensorflow.TensorShapeProto)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct TensorShapeProto {
    // message fields
    // @@protoc_insertion_point(field:tensorflow.TensorShapeProto.dim)
    pub dim: ::std::vec::Vec<tensor_shape_proto::Dim>,
    // @@protoc_insertion_point(field:tensorflow.TensorShapeProto.unknown_rank)
    pub unknown_rank: bool,
    // special fields
    // @@protoc_insertion_point(special_field:tensorflow.TensorShapeProto.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a TensorShapeProto {
    fn default() -> &'a TensorShapeProto {
        <TensorShapeProto as ::protobuf::Message>::default_instance()
    }
}

impl TensorShapeProto {
    pub fn new() -> TensorShapeProto {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(2);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "dim",
            |m: &TensorShapeProto| { &m.dim },
            |m: &mut TensorShapeProto| { &mut m.dim },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "unknown_rank",
            |m: &TensorShapeProto| { &m.unknown_rank },
            |m: &mut TensorShapeProto| { &mut m.unknown_rank },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<TensorShapeProto>(
            "TensorShapeProto",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for TensorShapeProto {
    const NAME: &'static str = "TensorShapeProto";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                18 => {
                    self.dim.push(is.read_message()?);
                },
                24 => {
                    self.unknown_rank = is.read_bool()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        for value in &self.dim {
            let len = value.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        };
        if self.unknown_rank != false {
            my_size += 1 + 1;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        for v in &self.dim {
            ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
        };
        if self.unknown_rank != false {
            os.write_bool(3, self.unknown_rank)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> TensorShapeProto {
        TensorShapeProto::new()
    }

    fn clear(&mut self) {
        self.dim.clear();
        self.unknown_rank = false;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static TensorShapeProto {
        static instance: TensorShapeProto = TensorShapeProto {
            dim: ::std::vec::Vec::new(),
            unknown_rank: false,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for TensorShapeProto {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("TensorShapeProto").unwrap()).clone()
    }
}

impl ::std::fmt::Display for TensorShapeProto {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for TensorShapeProto {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

/// Nested message and enums of message `TensorShapeProto`
pub mod tensor_shape_proto {
    // @@protoc_insertion_point(message:tensorflow.TensorShapeProto.Dim)
    #[derive(PartialEq,Clone,Default,Debug)]
    pub struct Dim {
        // message fields
        // @@protoc_insertion_point(field:tensorflow.TensorShapeProto.Dim.size)
        pub size: i64,
        // @@protoc_insertion_point(field:tensorflow.TensorShapeProto.Dim.name)
        pub name: ::std::string::String,
        // special fields
        // @@protoc_insertion_point(special_field:tensorflow.TensorShapeProto.Dim.special_fields)
        pub special_fields: ::protobuf::SpecialFields,
    }

    impl<'a> ::std::default::Default for &'a Dim {
        fn default() -> &'a Dim {
            <Dim as ::protobuf::Message>::default_instance()
        }
    }

    impl Dim {
        pub fn new() -> Dim {
            ::std::default::Default::default()
        }

        pub(in super) fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
            let mut fields = ::std::vec::Vec::with_capacity(2);
            let mut oneofs = ::std::vec::Vec::with_capacity(0);
            fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
                "size",
                |m: &Dim| { &m.size },
                |m: &mut Dim| { &mut m.size },
            ));
            fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
                "name",
                |m: &Dim| { &m.name },
                |m: &mut Dim| { &mut m.name },
            ));
            ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<Dim>(
                "TensorShapeProto.Dim",
                fields,
                oneofs,
            )
        }
    }

    impl ::protobuf::Message for Dim {
        const NAME: &'static str = "Dim";

        fn is_initialized(&self) -> bool {
            true
        }

        fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
            while let Some(tag) = is.read_raw_tag_or_eof()? {
                match tag {
                    8 => {
                        self.size = is.read_int64()?;
                    },
                    18 => {
                        self.name = is.read_string()?;
                    },
                    tag => {
                        ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                    },
                };
            }
            ::std::result::Result::Ok(())
        }

        // Compute sizes of nested messages
        #[allow(unused_variables)]
        fn compute_size(&self) -> u64 {
            let mut my_size = 0;
            if self.size != 0 {
                my_size += ::protobuf::rt::int64_size(1, self.size);
            }
            if !self.name.is_empty() {
                my_size += ::protobuf::rt::string_size(2, &self.name);
            }
            my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
            self.special_fields.cached_size().set(my_size as u32);
            my_size
        }

        fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
            if self.size != 0 {
                os.write_int64(1, self.size)?;
            }
            if !self.name.is_empty() {
                os.write_string(2, &self.name)?;
            }
            os.write_unknown_fields(self.special_fields.unknown_fields())?;
            ::std::result::Result::Ok(())
        }

        fn special_fields(&self) -> &::protobuf::SpecialFields {
            &self.special_fields
        }

        fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
            &mut self.special_fields
        }

        fn new() -> Dim {
            Dim::new()
        }

        fn clear(&mut self) {
            self.size = 0;
            self.name.clear();
            self.special_fields.clear();
        }

        fn default_instance() -> &'static Dim {
            static instance: Dim = Dim {
                size: 0,
                name: ::std::string::String::new(),
                special_fields: ::protobuf::SpecialFields::new(),
            };
            &instance
        }
    }

    impl ::protobuf::MessageFull for Dim {
        fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| super::file_descriptor().message_by_package_relative_name("TensorShapeProto.Dim").unwrap()).clone()
        }
    }

    impl ::std::fmt::Display for Dim {
        fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
            ::protobuf::text_format::fmt(self, f)
        }
    }

    impl ::protobuf::reflect::ProtobufValue for Dim {
        type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
    }
}

// @@protoc_insertion_point(message:tensorflow.VersionDef)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct VersionDef {
    // message fields
    // @@protoc_insertion_point(field:tensorflow.VersionDef.producer)
    pub producer: i32,
    // @@protoc_insertion_point(field:tensorflow.VersionDef.min_consumer)
    pub min_consumer: i32,
    // @@protoc_insertion_point(field:tensorflow.VersionDef.bad_consumers)
    pub bad_consumers: ::std::vec::Vec<i32>,
    // special fields
    // @@protoc_insertion_point(special_field:tensorflow.VersionDef.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a VersionDef {
    fn default() -> &'a VersionDef {
        <VersionDef as ::protobuf::Message>::default_instance()
    }
}

impl VersionDef {
    pub fn new() -> VersionDef {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(3);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "producer",
            |m: &VersionDef| { &m.producer },
            |m: &mut VersionDef| { &mut m.producer },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "min_consumer",
            |m: &VersionDef| { &m.min_consumer },
            |m: &mut VersionDef| { &mut m.min_consumer },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_vec_simpler_accessor::<_, _>(
            "bad_consumers",
            |m: &VersionDef| { &m.bad_consumers },
            |m: &mut VersionDef| { &mut m.bad_consumers },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<VersionDef>(
            "VersionDef",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for VersionDef {
    const NAME: &'static str = "VersionDef";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.producer = is.read_int32()?;
                },
                16 => {
                    self.min_consumer = is.read_int32()?;
                },
                26 => {
                    is.read_repeated_packed_int32_into(&mut self.bad_consumers)?;
                },
                24 => {
                    self.bad_consumers.push(is.read_int32()?);
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.producer != 0 {
            my_size += ::protobuf::rt::int32_size(1, self.producer);
        }
        if self.min_consumer != 0 {
            my_size += ::protobuf::rt::int32_size(2, self.min_consumer);
        }
        my_size += ::protobuf::rt::vec_packed_int32_size(3, &self.bad_consumers);
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.producer != 0 {
            os.write_int32(1, self.producer)?;
        }
        if self.min_consumer != 0 {
            os.write_int32(2, self.min_consumer)?;
        }
        os.write_repeated_packed_int32(3, &self.bad_consumers)?;
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> VersionDef {
        VersionDef::new()
    }

    fn clear(&mut self) {
        self.producer = 0;
        self.min_consumer = 0;
        self.bad_consumers.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static VersionDef {
        static instance: VersionDef = VersionDef {
            producer: 0,
            min_consumer: 0,
            bad_consumers: ::std::vec::Vec::new(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for VersionDef {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("VersionDef").unwrap()).clone()
    }
}

impl ::std::fmt::Display for VersionDef {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for VersionDef {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

// @@protoc_insertion_point(message:tensorflow.BundleHeaderProto)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct BundleHeaderProto {
    // message fields
    // @@protoc_insertion_point(field:tensorflow.BundleHeaderProto.num_shards)
    pub num_shards: i32,
    // @@protoc_insertion_point(field:tensorflow.BundleHeaderProto.endianness)
    pub endianness: ::protobuf::EnumOrUnknown<bundle_header_proto::Endianness>,
    // @@protoc_insertion_point(field:tensorflow.BundleHeaderProto.version)
    pub version: ::protobuf::MessageField<VersionDef>,
    // special fields
    // @@protoc_insertion_point(special_field:tensorflow.BundleHeaderProto.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a BundleHeaderProto {
    fn default() -> &'a BundleHeaderProto {
        <BundleHeaderProto as ::protobuf::Message>::default_instance()
    }
}

impl BundleHeaderProto {
    pub fn new() -> BundleHeaderProto {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(3);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "num_shards",
            |m: &BundleHeaderProto| { &m.num_shards },
            |m: &mut BundleHeaderProto| { &mut m.num_shards },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "endianness",
            |m: &BundleHeaderProto| { &m.endianness },
            |m: &mut BundleHeaderProto| { &mut m.endianness },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, VersionDef>(
            "version",
            |m: &BundleHeaderProto| { &m.version },
            |m: &mut BundleHeaderProto| { &mut m.version },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<BundleHeaderProto>(
            "BundleHeaderProto",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for BundleHeaderProto {
    const NAME: &'static str = "BundleHeaderProto";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.num_shards = is.read_int32()?;
                },
                16 => {
                    self.endianness = is.read_enum_or_unknown()?;
                },
                26 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.version)?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.num_shards != 0 {
            my_size += ::protobuf::rt::int32_size(1, self.num_shards);
        }
        if self.endianness != ::protobuf::EnumOrUnknown::new(bundle_header_proto::Endianness::LITTLE) {
            my_size += ::protobuf::rt::int32_size(2, self.endianness.value());
        }
        if let Some(v) = self.version.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.num_shards != 0 {
            os.write_int32(1, self.num_shards)?;
        }
        if self.endianness != ::protobuf::EnumOrUnknown::new(bundle_header_proto::Endianness::LITTLE) {
            os.write_enum(2, ::protobuf::EnumOrUnknown::value(&self.endianness))?;
        }
        if let Some(v) = self.version.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(3, v, os)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> BundleHeaderProto {
        BundleHeaderProto::new()
    }

    fn clear(&mut self) {
        self.num_shards = 0;
        self.endianness = ::protobuf::EnumOrUnknown::new(bundle_header_proto::Endianness::LITTLE);
        self.version.clear();
        self.special_fields.clear();
    }

    fn default_instance() -> &'static BundleHeaderProto {
        static instance: BundleHeaderProto = BundleHeaderProto {
            num_shards: 0,
            endianness: ::protobuf::EnumOrUnknown::from_i32(0),
            version: ::protobuf::MessageField::none(),
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for BundleHeaderProto {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("BundleHeaderProto").unwrap()).clone()
    }
}

impl ::std::fmt::Display for BundleHeaderProto {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for BundleHeaderProto {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

/// Nested message and enums of message `BundleHeaderProto`
pub mod bundle_header_proto {
    #[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
    // @@protoc_insertion_point(enum:tensorflow.BundleHeaderProto.Endianness)
    pub enum Endianness {
        // @@protoc_insertion_point(enum_value:tensorflow.BundleHeaderProto.Endianness.LITTLE)
        LITTLE = 0,
        // @@protoc_insertion_point(enum_value:tensorflow.BundleHeaderProto.Endianness.BIG)
        BIG = 1,
    }

    impl ::protobuf::Enum for Endianness {
        const NAME: &'static str = "Endianness";

        fn value(&self) -> i32 {
            *self as i32
        }

        fn from_i32(value: i32) -> ::std::option::Option<Endianness> {
            match value {
                0 => ::std::option::Option::Some(Endianness::LITTLE),
                1 => ::std::option::Option::Some(Endianness::BIG),
                _ => ::std::option::Option::None
            }
        }

        fn from_str(str: &str) -> ::std::option::Option<Endianness> {
            match str {
                "LITTLE" => ::std::option::Option::Some(Endianness::LITTLE),
                "BIG" => ::std::option::Option::Some(Endianness::BIG),
                _ => ::std::option::Option::None
            }
        }

        const VALUES: &'static [Endianness] = &[
            Endianness::LITTLE,
            Endianness::BIG,
        ];
    }

    impl ::protobuf::EnumFull for Endianness {
        fn enum_descriptor() -> ::protobuf::reflect::EnumDescriptor {
            static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::Lazy::new();
            descriptor.get(|| super::file_descriptor().enum_by_package_relative_name("BundleHeaderProto.Endianness").unwrap()).clone()
        }

        fn descriptor(&self) -> ::protobuf::reflect::EnumValueDescriptor {
            let index = *self as usize;
            Self::enum_descriptor().value_by_index(index)
        }
    }

    impl ::std::default::Default for Endianness {
        fn default() -> Self {
            Endianness::LITTLE
        }
    }

    impl Endianness {
        pub(in super) fn generated_enum_descriptor_data() -> ::protobuf::reflect::GeneratedEnumDescriptorData {
            ::protobuf::reflect::GeneratedEnumDescriptorData::new::<Endianness>("BundleHeaderProto.Endianness")
        }
    }
}

// @@protoc_insertion_point(message:tensorflow.BundleEntryProto)
#[derive(PartialEq,Clone,Default,Debug)]
pub struct BundleEntryProto {
    // message fields
    // @@protoc_insertion_point(field:tensorflow.BundleEntryProto.dtype)
    pub dtype: ::protobuf::EnumOrUnknown<DataType>,
    // @@protoc_insertion_point(field:tensorflow.BundleEntryProto.shape)
    pub shape: ::protobuf::MessageField<TensorShapeProto>,
    // @@protoc_insertion_point(field:tensorflow.BundleEntryProto.shard_id)
    pub shard_id: i32,
    // @@protoc_insertion_point(field:tensorflow.BundleEntryProto.offset)
    pub offset: i64,
    // @@protoc_insertion_point(field:tensorflow.BundleEntryProto.size)
    pub size: i64,
    // @@protoc_insertion_point(field:tensorflow.BundleEntryProto.crc32c)
    pub crc32c: u32,
    // special fields
    // @@protoc_insertion_point(special_field:tensorflow.BundleEntryProto.special_fields)
    pub special_fields: ::protobuf::SpecialFields,
}

impl<'a> ::std::default::Default for &'a BundleEntryProto {
    fn default() -> &'a BundleEntryProto {
        <BundleEntryProto as ::protobuf::Message>::default_instance()
    }
}

impl BundleEntryProto {
    pub fn new() -> BundleEntryProto {
        ::std::default::Default::default()
    }

    fn generated_message_descriptor_data() -> ::protobuf::reflect::GeneratedMessageDescriptorData {
        let mut fields = ::std::vec::Vec::with_capacity(6);
        let mut oneofs = ::std::vec::Vec::with_capacity(0);
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "dtype",
            |m: &BundleEntryProto| { &m.dtype },
            |m: &mut BundleEntryProto| { &mut m.dtype },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_message_field_accessor::<_, TensorShapeProto>(
            "shape",
            |m: &BundleEntryProto| { &m.shape },
            |m: &mut BundleEntryProto| { &mut m.shape },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "shard_id",
            |m: &BundleEntryProto| { &m.shard_id },
            |m: &mut BundleEntryProto| { &mut m.shard_id },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "offset",
            |m: &BundleEntryProto| { &m.offset },
            |m: &mut BundleEntryProto| { &mut m.offset },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "size",
            |m: &BundleEntryProto| { &m.size },
            |m: &mut BundleEntryProto| { &mut m.size },
        ));
        fields.push(::protobuf::reflect::rt::v2::make_simpler_field_accessor::<_, _>(
            "crc32c",
            |m: &BundleEntryProto| { &m.crc32c },
            |m: &mut BundleEntryProto| { &mut m.crc32c },
        ));
        ::protobuf::reflect::GeneratedMessageDescriptorData::new_2::<BundleEntryProto>(
            "BundleEntryProto",
            fields,
            oneofs,
        )
    }
}

impl ::protobuf::Message for BundleEntryProto {
    const NAME: &'static str = "BundleEntryProto";

    fn is_initialized(&self) -> bool {
        true
    }

    fn merge_from(&mut self, is: &mut ::protobuf::CodedInputStream<'_>) -> ::protobuf::Result<()> {
        while let Some(tag) = is.read_raw_tag_or_eof()? {
            match tag {
                8 => {
                    self.dtype = is.read_enum_or_unknown()?;
                },
                18 => {
                    ::protobuf::rt::read_singular_message_into_field(is, &mut self.shape)?;
                },
                24 => {
                    self.shard_id = is.read_int32()?;
                },
                32 => {
                    self.offset = is.read_int64()?;
                },
                40 => {
                    self.size = is.read_int64()?;
                },
                53 => {
                    self.crc32c = is.read_fixed32()?;
                },
                tag => {
                    ::protobuf::rt::read_unknown_or_skip_group(tag, is, self.special_fields.mut_unknown_fields())?;
                },
            };
        }
        ::std::result::Result::Ok(())
    }

    // Compute sizes of nested messages
    #[allow(unused_variables)]
    fn compute_size(&self) -> u64 {
        let mut my_size = 0;
        if self.dtype != ::protobuf::EnumOrUnknown::new(DataType::DT_INVALID) {
            my_size += ::protobuf::rt::int32_size(1, self.dtype.value());
        }
        if let Some(v) = self.shape.as_ref() {
            let len = v.compute_size();
            my_size += 1 + ::protobuf::rt::compute_raw_varint64_size(len) + len;
        }
        if self.shard_id != 0 {
            my_size += ::protobuf::rt::int32_size(3, self.shard_id);
        }
        if self.offset != 0 {
            my_size += ::protobuf::rt::int64_size(4, self.offset);
        }
        if self.size != 0 {
            my_size += ::protobuf::rt::int64_size(5, self.size);
        }
        if self.crc32c != 0 {
            my_size += 1 + 4;
        }
        my_size += ::protobuf::rt::unknown_fields_size(self.special_fields.unknown_fields());
        self.special_fields.cached_size().set(my_size as u32);
        my_size
    }

    fn write_to_with_cached_sizes(&self, os: &mut ::protobuf::CodedOutputStream<'_>) -> ::protobuf::Result<()> {
        if self.dtype != ::protobuf::EnumOrUnknown::new(DataType::DT_INVALID) {
            os.write_enum(1, ::protobuf::EnumOrUnknown::value(&self.dtype))?;
        }
        if let Some(v) = self.shape.as_ref() {
            ::protobuf::rt::write_message_field_with_cached_size(2, v, os)?;
        }
        if self.shard_id != 0 {
            os.write_int32(3, self.shard_id)?;
        }
        if self.offset != 0 {
            os.write_int64(4, self.offset)?;
        }
        if self.size != 0 {
            os.write_int64(5, self.size)?;
        }
        if self.crc32c != 0 {
            os.write_fixed32(6, self.crc32c)?;
        }
        os.write_unknown_fields(self.special_fields.unknown_fields())?;
        ::std::result::Result::Ok(())
    }

    fn special_fields(&self) -> &::protobuf::SpecialFields {
        &self.special_fields
    }

    fn mut_special_fields(&mut self) -> &mut ::protobuf::SpecialFields {
        &mut self.special_fields
    }

    fn new() -> BundleEntryProto {
        BundleEntryProto::new()
    }

    fn clear(&mut self) {
        self.dtype = ::protobuf::EnumOrUnknown::new(DataType::DT_INVALID);
        self.shape.clear();
        self.shard_id = 0;
        self.offset = 0;
        self.size = 0;
        self.crc32c = 0;
        self.special_fields.clear();
    }

    fn default_instance() -> &'static BundleEntryProto {
        static instance: BundleEntryProto = BundleEntryProto {
            dtype: ::protobuf::EnumOrUnknown::from_i32(0),
            shape: ::protobuf::MessageField::none(),
            shard_id: 0,
            offset: 0,
            size: 0,
            crc32c: 0,
            special_fields: ::protobuf::SpecialFields::new(),
        };
        &instance
    }
}

impl ::protobuf::MessageFull for BundleEntryProto {
    fn descriptor() -> ::protobuf::reflect::MessageDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::MessageDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().message_by_package_relative_name("BundleEntryProto").unwrap()).clone()
    }
}

impl ::std::fmt::Display for BundleEntryProto {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        ::protobuf::text_format::fmt(self, f)
    }
}

impl ::protobuf::reflect::ProtobufValue for BundleEntryProto {
    type RuntimeType = ::protobuf::reflect::rt::RuntimeTypeMessage<Self>;
}

#[derive(Clone,Copy,PartialEq,Eq,Debug,Hash)]
// @@protoc_insertion_point(enum:tensorflow.DataType)
pub enum DataType {
    // @@protoc_insertion_point(enum_value:tensorflow.DataType.DT_INVALID)
    DT_INVALID = 0,
    // @@protoc_insertion_point(enum_value:tensorflow.DataType.DT_FLOAT)
    DT_FLOAT = 1,
    // @@protoc_insertion_point(enum_value:tensorflow.DataType.DT_DOUBLE)
    DT_DOUBLE = 2,
    // @@protoc_insertion_point(enum_value:tensorflow.DataType.DT_INT32)
    DT_INT32 = 3,
    // @@protoc_insertion_point(enum_value:tensorflow.DataType.DT_UINT8)
    DT_UINT8 = 4,
    // @@protoc_insertion_point(enum_value:tensorflow.DataType.DT_INT16)
    DT_INT16 = 5,
    // @@protoc_insertion_point(enum_value:tensorflow.DataType.DT_INT8)
    DT_INT8 = 6,
    // @@protoc_insertion_point(enum_value:tensorflow.DataType.DT_STRING)
    DT_STRING = 7,
    // @@protoc_insertion_point(enum_value:tensorflow.DataType.DT_COMPLEX64)
    DT_COMPLEX64 = 8,
    // @@protoc_insertion_point(enum_value:tensorflow.DataType.DT_INT64)
    DT_INT64 = 9,
    // @@protoc_insertion_point(enum_value:tensorflow.DataType.DT_BOOL)
    DT_BOOL = 10,
    // @@protoc_insertion_point(enum_value:tensorflow.DataType.DT_BFLOAT16)
    DT_BFLOAT16 = 14,
    // @@protoc_insertion_point(enum_value:tensorflow.DataType.DT_HALF)
    DT_HALF = 19,
}

impl ::protobuf::Enum for DataType {
    const NAME: &'static str = "DataType";

    fn value(&self) -> i32 {
        *self as i32
    }

    fn from_i32(value: i32) -> ::std::option::Option<DataType> {
        match value {
            0 => ::std::option::Option::Some(DataType::DT_INVALID),
            1 => ::std::option::Option::Some(DataType::DT_FLOAT),
            2 => ::std::option::Option::Some(DataType::DT_DOUBLE),
            3 => ::std::option::Option::Some(DataType::DT_INT32),
            4 => ::std::option::Option::Some(DataType::DT_UINT8),
            5 => ::std::option::Option::Some(DataType::DT_INT16),
            6 => ::std::option::Option::Some(DataType::DT_INT8),
            7 => ::std::option::Option::Some(DataType::DT_STRING),
            8 => ::std::option::Option::Some(DataType::DT_COMPLEX64),
            9 => ::std::option::Option::Some(DataType::DT_INT64),
            10 => ::std::option::Option::Some(DataType::DT_BOOL),
            14 => ::std::option::Option::Some(DataType::DT_BFLOAT16),
            19 => ::std::option::Option::Some(DataType::DT_HALF),
            _ => ::std::option::Option::None
        }
    }

    fn from_str(str: &str) -> ::std::option::Option<DataType> {
        match str {
            "DT_INVALID" => ::std::option::Option::Some(DataType::DT_INVALID),
            "DT_FLOAT" => ::std::option::Option::Some(DataType::DT_FLOAT),
            "DT_DOUBLE" => ::std::option::Option::Some(DataType::DT_DOUBLE),
            "DT_INT32" => ::std::option::Option::Some(DataType::DT_INT32),
            "DT_UINT8" => ::std::option::Option::Some(DataType::DT_UINT8),
            "DT_INT16" => ::std::option::Option::Some(DataType::DT_INT16),
            "DT_INT8" => ::std::option::Option::Some(DataType::DT_INT8),
            "DT_STRING" => ::std::option::Option::Some(DataType::DT_STRING),
            "DT_COMPLEX64" => ::std::option::Option::Some(DataType::DT_COMPLEX64),
            "DT_INT64" => ::std::option::Option::Some(DataType::DT_INT64),
            "DT_BOOL" => ::std::option::Option::Some(DataType::DT_BOOL),
            "DT_BFLOAT16" => ::std::option::Option::Some(DataType::DT_BFLOAT16),
            "DT_HALF" => ::std::option::Option::Some(DataType::DT_HALF),
            _ => ::std::option::Option::None
        }
    }

    const VALUES: &'static [DataType] = &[
        DataType::DT_INVALID,
        DataType::DT_FLOAT,
        DataType::DT_DOUBLE,
        DataType::DT_INT32,
        DataType::DT_UINT8,
        DataType::DT_INT16,
        DataType::DT_INT8,
        DataType::DT_STRING,
        DataType::DT_COMPLEX64,
        DataType::DT_INT64,
        DataType::DT_BOOL,
        DataType::DT_BFLOAT16,
        DataType::DT_HALF,
    ];
}

impl ::protobuf::EnumFull for DataType {
    fn enum_descriptor() -> ::protobuf::reflect::EnumDescriptor {
        static descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::EnumDescriptor> = ::protobuf::rt::Lazy::new();
        descriptor.get(|| file_descriptor().enum_by_package_relative_name("DataType").unwrap()).clone()
    }

    fn descriptor(&self) -> ::protobuf::reflect::EnumValueDescriptor {
        let index = match self {
            DataType::DT_INVALID => 0,
            DataType::DT_FLOAT => 1,
            DataType::DT_DOUBLE => 2,
            DataType::DT_INT32 => 3,
            DataType::DT_UINT8 => 4,
            DataType::DT_INT16 => 5,
            DataType::DT_INT8 => 6,
            DataType::DT_STRING => 7,
            DataType::DT_COMPLEX64 => 8,
            DataType::DT_INT64 => 9,
            DataType::DT_BOOL => 10,
            DataType::DT_BFLOAT16 => 11,
            DataType::DT_HALF => 12,
        };
        Self::enum_descriptor().value_by_index(index)
    }
}

impl ::std::default::Default for DataType {
    fn default() -> Self {
        DataType::DT_INVALID
    }
}

impl DataType {
    fn generated_enum_descriptor_data() -> ::protobuf::reflect::GeneratedEnumDescriptorData {
        ::protobuf::reflect::GeneratedEnumDescriptorData::new::<DataType>("DataType")
    }
}

static file_descriptor_proto_data: &'static [u8] = b"\
    \n\x13tensor_bundle.proto\x12\ntensorflow\"\x98\x01\n\x10TensorShapeProt\
    o\x122\n\x03dim\x18\x02\x20\x03(\x0b2\x20.tensorflow.TensorShapeProto.Di\
    mR\x03dim\x12!\n\x0cunknown_rank\x18\x03\x20\x01(\x08R\x0bunknownRank\
    \x1a-\n\x03Dim\x12\x12\n\x04size\x18\x01\x20\x01(\x03R\x04size\x12\x12\n\
    \x04name\x18\x02\x20\x01(\tR\x04name\"p\n\nVersionDef\x12\x1a\n\x08produ\
    cer\x18\x01\x20\x01(\x05R\x08producer\x12!\n\x0cmin_consumer\x18\x02\x20\
    \x01(\x05R\x0bminConsumer\x12#\n\rbad_consumers\x18\x03\x20\x03(\x05R\
    \x0cbadConsumers\"\xd1\x01\n\x11BundleHeaderProto\x12\x1d\n\nnum_shards\
    \x18\x01\x20\x01(\x05R\tnumShards\x12H\n\nendianness\x18\x02\x20\x01(\
    \x0e2(.tensorflow.BundleHeaderProto.EndiannessR\nendianness\x120\n\x07ve\
    rsion\x18\x03\x20\x01(\x0b2\x16.tensorflow.VersionDefR\x07version\"!\n\n\
    Endianness\x12\n\n\x06LITTLE\x10\0\x12\x07\n\x03BIG\x10\x01\"\xd1\x01\n\
    \x10BundleEntryProto\x12*\n\x05dtype\x18\x01\x20\x01(\x0e2\x14.tensorflo\
    w.DataTypeR\x05dtype\x122\n\x05shape\x18\x02\x20\x01(\x0b2\x1c.tensorflo\
    w.TensorShapeProtoR\x05shape\x12\x19\n\x08shard_id\x18\x03\x20\x01(\x05R\
    \x07shardId\x12\x16\n\x06offset\x18\x04\x20\x01(\x03R\x06offset\x12\x12\
    \n\x04size\x18\x05\x20\x01(\x03R\x04size\x12\x16\n\x06crc32c\x18\x06\x20\
    \x01(\x07R\x06crc32c*\xc8\x01\n\x08DataType\x12\x0e\n\nDT_INVALID\x10\0\
    \x12\x0c\n\x08DT_FLOAT\x10\x01\x12\r\n\tDT_DOUBLE\x10\x02\x12\x0c\n\x08D\
    T_INT32\x10\x03\x12\x0c\n\x08DT_UINT8\x10\x04\x12\x0c\n\x08DT_INT16\x10\
    \x05\x12\x0b\n\x07DT_INT8\x10\x06\x12\r\n\tDT_STRING\x10\x07\x12\x10\n\
    \x0cDT_COMPLEX64\x10\x08\x12\x0c\n\x08DT_INT64\x10\t\x12\x0b\n\x07DT_BOO\
    L\x10\n\x12\x0f\n\x0bDT_BFLOAT16\x10\x0e\x12\x0b\n\x07DT_HALF\x10\x13b\
    \x06proto3\
";

/// `FileDescriptorProto` object which was a source for this generated file
fn file_descriptor_proto() -> &'static ::protobuf::descriptor::FileDescriptorProto {
    static file_descriptor_proto_lazy: ::protobuf::rt::Lazy<::protobuf::descriptor::FileDescriptorProto> = ::protobuf::rt::Lazy::new();
    file_descriptor_proto_lazy.get(|| {
        ::protobuf::Message::parse_from_bytes(file_descriptor_proto_data).unwrap()
    })
}

/// `FileDescriptor` object which allows dynamic access to files
pub fn file_descriptor() -> &'static ::protobuf::reflect::FileDescriptor {
    static generated_file_descriptor_lazy: ::protobuf::rt::Lazy<::protobuf::reflect::GeneratedFileDescriptor> = ::protobuf::rt::Lazy::new();
    static file_descriptor: ::protobuf::rt::Lazy<::protobuf::reflect::FileDescriptor> = ::protobuf::rt::Lazy::new();
    file_descriptor.get(|| {
        let generated_file_descriptor = generated_file_descriptor_lazy.get(|| {
            let mut deps = ::std::vec::Vec::with_capacity(0);
            let mut messages = ::std::vec::Vec::with_capacity(5);
            messages.push(TensorShapeProto::generated_message_descriptor_data());
            messages.push(VersionDef::generated_message_descriptor_data());
            messages.push(BundleHeaderProto::generated_message_descriptor_data());
            messages.push(BundleEntryProto::generated_message_descriptor_data());
            messages.push(tensor_shape_proto::Dim::generated_message_descriptor_data());
            let mut enums = ::std::vec::Vec::with_capacity(2);
            enums.push(DataType::generated_enum_descriptor_data());
            enums.push(bundle_header_proto::Endianness::generated_enum_descriptor_data());
            ::protobuf::reflect::GeneratedFileDescriptor::new_generated(
                file_descriptor_proto(),
                deps,
                messages,
                enums,
            )
        });
        ::protobuf::reflect::FileDescriptor::new_generated_2(generated_file_descriptor)
    })
}
