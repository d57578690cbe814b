// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Beans implemented by hand against the core traits.

use std::sync::Arc;

use metabean_core::{
    BasicBeanBuilder, Bean, BeanDefinition, BeanError, BeanIterator, BeanType, BuilderArgs,
    DirectMetaProperty, InheritedMetaProperty, LightMetaBean, MetaBean, MetaProperty,
    MetaPropertyMap, MinimalMetaBean, PropertyPath, PropertyStyle, PropertyType, TypeInfo, Value,
    registry, types, utils
};

#[derive(Debug, Clone, Default, PartialEq)]
struct Person {
    name:    String,
    age:     u32,
    tags:    Vec<String>,
    address: Option<Address>
}

#[derive(Debug, Clone, PartialEq)]
struct Address {
    city: String,
    zip:  String
}

#[derive(Debug, Clone, Default, PartialEq)]
struct Employee {
    person: Person,
    salary: i64
}

impl Bean for Person {
    fn meta_bean(&self) -> Arc<dyn MetaBean> {
        Self::meta()
    }

    fn clone_bean(&self) -> Box<dyn Bean> {
        Box::new(self.clone())
    }
}

impl BeanDefinition for Person {
    type Meta = MinimalMetaBean;

    fn meta() -> Arc<Self::Meta> {
        registry::static_meta::<Self, _>(|| {
            let bean_type = BeanType::new::<Self>(types::intern(TypeInfo::class("demo::Person")));
            let rw = PropertyStyle::ReadWrite;
            let map = MetaPropertyMap::builder("demo::Person")
                .property(Arc::new(
                    DirectMetaProperty::<Self, String>::new("name", bean_type.clone(), rw)
                        .with_getter(|b| b.name.clone())
                        .with_setter(|b, v| {
                            utils::not_blank(&v, "name")?;
                            b.name = v;
                            Ok(())
                        })
                ))
                .property(Arc::new(
                    DirectMetaProperty::<Self, u32>::new("age", bean_type.clone(), rw)
                        .with_getter(|b| b.age)
                        .with_setter(|b, v| {
                            b.age = v;
                            Ok(())
                        })
                ))
                .property(Arc::new(
                    DirectMetaProperty::<Self, Vec<String>>::new("tags", bean_type.clone(), rw)
                        .with_getter(|b| b.tags.clone())
                        .with_setter(|b, v| {
                            b.tags = v;
                            Ok(())
                        })
                ))
                .property(Arc::new(
                    DirectMetaProperty::<Self, Option<Address>>::new(
                        "address",
                        bean_type.clone(),
                        rw
                    )
                    .with_getter(|b| b.address.clone())
                    .with_setter(|b, v| {
                        b.address = v;
                        Ok(())
                    })
                ))
                .alias("years", "age")
                .build()
                .unwrap_or_else(|err| panic!("invalid Person properties: {err}"));
            MinimalMetaBean::new(
                bean_type,
                map,
                Some(|| Box::new(BasicBeanBuilder::new(Person::default())))
            )
        })
    }
}

impl Bean for Address {
    fn meta_bean(&self) -> Arc<dyn MetaBean> {
        Self::meta()
    }

    fn clone_bean(&self) -> Box<dyn Bean> {
        Box::new(self.clone())
    }
}

impl BeanDefinition for Address {
    type Meta = LightMetaBean;

    fn meta() -> Arc<Self::Meta> {
        registry::static_meta::<Self, _>(|| {
            let bean_type = BeanType::new::<Self>(types::intern(TypeInfo::class("demo::Address")));
            let ro = PropertyStyle::ReadOnlyBuildable;
            let map = MetaPropertyMap::builder("demo::Address")
                .property(Arc::new(
                    DirectMetaProperty::<Self, String>::new("city", bean_type.clone(), ro)
                        .with_getter(|b| b.city.clone())
                ))
                .property(Arc::new(
                    DirectMetaProperty::<Self, String>::new("zip", bean_type.clone(), ro)
                        .with_getter(|b| b.zip.clone())
                ))
                .build()
                .unwrap_or_else(|err| panic!("invalid Address properties: {err}"));
            LightMetaBean::new(bean_type, map, construct_address)
        })
    }
}

impl PropertyType for Address {
    fn type_info() -> Arc<TypeInfo> {
        Self::meta().bean_type().type_info().clone()
    }

    fn to_value(&self) -> Value {
        Value::bean(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, BeanError> {
        value.into_typed_bean()
    }
}

fn construct_address(mut args: BuilderArgs) -> Result<Box<dyn Bean>, BeanError> {
    let city: String = args.take("city")?;
    utils::not_empty(&city, "city")?;
    Ok(Box::new(Address {
        city,
        zip: args.take_or_default("zip")?
    }))
}

impl Bean for Employee {
    fn meta_bean(&self) -> Arc<dyn MetaBean> {
        Self::meta()
    }

    fn clone_bean(&self) -> Box<dyn Bean> {
        Box::new(self.clone())
    }
}

impl BeanDefinition for Employee {
    type Meta = MinimalMetaBean;

    fn meta() -> Arc<Self::Meta> {
        registry::static_meta::<Self, _>(|| {
            let info = TypeInfo::class("demo::Employee").with_supertype(
                types::GenericType::class(Person::meta().bean_type().type_info().clone())
            );
            let bean_type = BeanType::new::<Self>(types::intern(info));
            let map = MetaPropertyMap::builder("demo::Employee")
                .inherit(Person::meta().meta_property_map(), |inner| {
                    Arc::new(InheritedMetaProperty::<Self>::new(
                        inner,
                        bean_type.clone(),
                        |b| &b.person,
                        |b| &mut b.person
                    ))
                })
                .property(Arc::new(
                    DirectMetaProperty::<Self, i64>::new(
                        "salary",
                        bean_type.clone(),
                        PropertyStyle::ReadWrite
                    )
                    .with_getter(|b| b.salary)
                    .with_setter(|b, v| {
                        b.salary = v;
                        Ok(())
                    })
                ))
                .build()
                .unwrap_or_else(|err| panic!("invalid Employee properties: {err}"));
            MinimalMetaBean::new(
                bean_type,
                map,
                Some(|| Box::new(BasicBeanBuilder::new(Employee::default())))
            )
        })
    }
}

fn ada() -> Person {
    Person {
        name:    "Ada".into(),
        age:     36,
        tags:    vec!["math".into()],
        address: Some(Address {
            city: "London".into(),
            zip:  "N1".into()
        })
    }
}

#[test]
fn reads_and_writes_through_meta_properties() {
    let mut person = ada();
    let bean: &mut dyn Bean = &mut person;
    assert_eq!(bean.get("age").unwrap(), Value::UInt(36));
    assert_eq!(bean.get("years").unwrap(), Value::UInt(36));
    bean.set("age", 37).unwrap();
    assert_eq!(person.age, 37);
}

#[test]
fn setter_validation_is_reported() {
    let mut person = ada();
    let bean: &mut dyn Bean = &mut person;
    let err = bean.set("name", "  ").unwrap_err();
    assert!(err.is_validation());
    assert_eq!(person.name, "Ada");
}

#[test]
fn unknown_property_fails() {
    let person = ada();
    let bean: &dyn Bean = &person;
    assert!(bean.get("nope").unwrap_err().is_no_such_property());
}

#[test]
fn read_only_property_rejects_set() {
    let mut address = Address {
        city: "Oslo".into(),
        zip:  "0150".into()
    };
    let bean: &mut dyn Bean = &mut address;
    assert_eq!(bean.set("city", "Bergen"), Err(BeanError::ReadOnly("city".into())));
}

#[test]
fn light_builder_uses_constructor() {
    let meta = Address::meta();
    let mut builder = meta.builder().unwrap();
    builder.set("city", "Oslo".into()).unwrap();
    let built = builder.build().unwrap();
    let address = built.downcast_ref::<Address>().unwrap();
    assert_eq!(address.city, "Oslo");
    assert_eq!(address.zip, "");

    let mut empty = meta.builder().unwrap();
    empty.set("city", "".into()).unwrap();
    assert!(empty.build().unwrap_err().is_validation());
}

#[test]
fn inherited_properties_share_parent_identity() {
    let employee_meta = Employee::meta();
    let person_meta = Person::meta();
    let inherited = employee_meta.meta_property("name").unwrap();
    let declared = person_meta.meta_property("name").unwrap();
    assert_eq!(&*inherited, &*declared);
    assert_eq!(inherited.declaring_type(), person_meta.bean_type());
    assert_eq!(
        employee_meta.meta_property_map().names(),
        ["name", "age", "tags", "address", "salary"]
    );

    let mut employee = Employee {
        person: ada(),
        salary: 10
    };
    let bean: &mut dyn Bean = &mut employee;
    bean.set("years", 40).unwrap();
    assert_eq!(employee.person.age, 40);
}

#[test]
fn properties_equal_and_hash_agree() {
    let a = ada();
    let b = ada();
    assert!(utils::properties_equal(&a, &b));
    assert_eq!(utils::properties_hash_code(&a), utils::properties_hash_code(&b));
    let mut c = ada();
    c.tags.push("logic".into());
    assert!(!utils::properties_equal(&a, &c));
}

#[test]
fn deep_clone_copies_nested_bean() {
    let original = ada();
    let copy = utils::clone_always(&original).unwrap();
    assert_eq!(copy, original);
}

#[test]
fn path_reaches_nested_property() {
    let path = PropertyPath::<String>::of("address.city").unwrap();
    assert_eq!(path.get(&ada()), Some("London".into()));
    let tag = PropertyPath::<String>::of("tags[0]").unwrap();
    assert_eq!(tag.get(&ada()), Some("math".into()));
}

#[test]
fn iterator_visits_nested_beans() {
    let employee = Employee {
        person: ada(),
        salary: 1
    };
    let kinds: Vec<String> = BeanIterator::new(&employee)
        .map(|bean| bean.bean_type().simple_name().to_owned())
        .collect();
    assert_eq!(kinds, ["Employee", "Address"]);
}

#[test]
fn registry_lookup_by_name() {
    registry::lookup::<Person>();
    let meta = registry::meta_bean_by_name("demo::Person").unwrap();
    assert_eq!(meta.meta_property_count(), 4);
    assert!(meta.meta_property_exists("years"));
}

#[test]
fn to_string_lists_properties() {
    let address = Address {
        city: "Oslo".into(),
        zip:  "0150".into()
    };
    assert_eq!(utils::to_string(&address), "Address{city=Oslo, zip=0150}");
}
