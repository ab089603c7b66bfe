//! A small, fixed set of objects for trying the tools without real data.

use model::{
    CimObject, CimString, CimType, CimValue, Class, ClassParts, DateTime, Flavor, Instance,
    KeyBinding, KeyBindingType, Method, Name, NamespaceName, ObjectPath, Parameter, Property,
    Qualifier, QualifierList,
};

const NAMESPACE: &str = "root/cimv2";

/// Returns a class followed by instances of it.
#[must_use]
pub fn sample_objects() -> Vec<CimObject> {
    let mut objects = vec![CimObject::Class(disk_class())];
    objects.extend(
        [("C:", 512_000_000_000u64), ("D:", 2_000_000_000_000)]
            .into_iter()
            .map(|(id, size)| CimObject::Instance(disk_instance(id, size))),
    );
    objects
}

fn key() -> Qualifier {
    Qualifier::new("Key", CimValue::Boolean(true))
        .with_flavor(Flavor::from_raw(Flavor::DEFAULTS.raw() | Flavor::DISABLEOVERRIDE))
}

fn disk_class() -> Class {
    let reset = Method::new("Reset", CimType::Uint32)
        .with_parameter(Parameter::new("Force", CimType::Boolean))
        .with_parameter(
            Parameter::new("Job", CimType::Reference).with_reference_class("CIM_ConcreteJob"),
        );
    Class::from_parts(ClassParts {
        path: ObjectPath::new("CIM_LogicalDisk"),
        super_class: Name::new("CIM_StorageExtent"),
        qualifiers: QualifierList::from(vec![Qualifier::new(
            "Description",
            CimValue::from("A logical storage volume"),
        )]),
        properties: vec![
            Property::new("DeviceID", CimValue::null(CimType::String, false))
                .with_qualifier(key()),
            Property::new("Size", CimValue::null(CimType::Uint64, false)),
            Property::new("InstallDate", CimValue::null(CimType::DateTime, false))
                .with_class_origin("CIM_ManagedSystemElement")
                .with_propagated(true),
            Property::new("OperationalStatus", CimValue::null(CimType::Uint16, true)),
        ],
        methods: vec![reset],
    })
}

fn disk_instance(device_id: &str, size: u64) -> Instance {
    let path = ObjectPath::from_parts(
        CimString::from("localhost:5988"),
        NamespaceName::new(NAMESPACE),
        Name::new("CIM_LogicalDisk"),
        vec![KeyBinding::new("DeviceID", device_id, KeyBindingType::String)],
    );
    let system = ObjectPath::new("CIM_ComputerSystem")
        .with_namespace(NAMESPACE)
        .with_key_binding(KeyBinding::new("Name", "localhost", KeyBindingType::String));

    let properties = vec![
        Property::new("DeviceID", CimValue::from(device_id)),
        Property::new("Size", CimValue::Uint64(size)),
        Property::new(
            "InstallDate",
            CimValue::DateTime(DateTime::timestamp(63_850_000_000_000_000, 60)),
        ),
        Property::new("OperationalStatus", CimValue::Uint16Array(vec![2])),
        Property::new("System", CimValue::Reference(system))
            .with_reference_class("CIM_ComputerSystem"),
        Property::new(
            "Labels",
            CimValue::StringArray(vec![CimString::from("data"), CimString::from("backup")]),
        ),
    ];
    Instance::from_parts(path, Default::default(), properties)
}
