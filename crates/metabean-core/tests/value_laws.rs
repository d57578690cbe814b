// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use metabean_core::{
    Bean, BeanType, DirectMetaProperty, FlexiBean, MetaBean, MetaPropertyMap, MinimalMetaBean,
    PropertyStyle, ResolvedType, TypeInfo, Value, registry, types, utils
};
use proptest::prelude::*;

/// Bean whose only property can be written but never read.
#[derive(Debug, Clone, Default)]
struct Secret {
    pin: i64
}

impl Bean for Secret {
    fn meta_bean(&self) -> Arc<dyn MetaBean> {
        registry::static_meta::<Self, _>(|| {
            let bean_type = BeanType::new::<Self>(types::intern(TypeInfo::class("laws::Secret")));
            let map = MetaPropertyMap::builder("laws::Secret")
                .property(Arc::new(
                    DirectMetaProperty::<Self, i64>::new(
                        "pin",
                        bean_type.clone(),
                        PropertyStyle::WriteOnly
                    )
                    .with_setter(|bean, pin| {
                        bean.pin = pin;
                        Ok(())
                    })
                ))
                .build()
                .unwrap_or_else(|err| panic!("invalid Secret properties: {err}"));
            MinimalMetaBean::new(bean_type, map, None)
        })
    }

    fn clone_bean(&self) -> Box<dyn Bean> {
        Box::new(self.clone())
    }
}

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        any::<f64>().prop_map(Value::Float),
        "[a-z]{0,8}".prop_map(Value::String)
    ]
}

fn value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Set),
            inner.prop_map(Value::some)
        ]
    })
}

fn type_name() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        Just("String".to_owned()),
        Just("i32".to_owned()),
        Just("bool".to_owned())
    ];
    leaf.prop_recursive(3, 12, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|t| format!("Vec<{t}>")),
            inner.clone().prop_map(|t| format!("Option<{t}>")),
            (inner.clone(), inner).prop_map(|(k, v)| format!("HashMap<{k}, {v}>"))
        ]
    })
}

proptest! {
    #[test]
    fn equal_values_hash_equally(v in value()) {
        let copy = v.clone();
        prop_assert!(utils::equal(&v, &copy));
        prop_assert_eq!(utils::hash_code(&v), utils::hash_code(&copy));
    }

    #[test]
    fn set_equality_ignores_order(items in prop::collection::vec(leaf(), 0..5)) {
        let mut reversed = items.clone();
        reversed.reverse();
        let a = Value::Set(items);
        let b = Value::Set(reversed);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(utils::hash_code(&a), utils::hash_code(&b));
    }

    #[test]
    fn compare_is_consistent_with_equality(a in value(), b in value()) {
        if a == b {
            prop_assert_eq!(a.compare(&b), std::cmp::Ordering::Equal);
        }
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
    }

    #[test]
    fn resolved_type_text_is_stable(text in type_name()) {
        let parsed = ResolvedType::parse(&text).unwrap();
        prop_assert_eq!(parsed.to_string(), text.clone());
        prop_assert_eq!(ResolvedType::parse(&parsed.to_string()).unwrap(), parsed);
    }

    #[test]
    fn readability_must_match_on_both_sides(pin in any::<i64>()) {
        let secret = Secret { pin };
        let flexi = FlexiBean::new().with("pin", pin);
        prop_assert!(!utils::properties_equal(&secret, &flexi));
        prop_assert!(!utils::properties_equal(&flexi, &secret));
        let other = Secret { pin: pin.wrapping_add(1) };
        prop_assert!(utils::properties_equal(&secret, &other));
        prop_assert_eq!(
            utils::properties_hash_code(&secret),
            utils::properties_hash_code(&Secret::default())
        );
    }

    #[test]
    fn properties_equal_is_symmetric_and_hash_agrees(
        x in leaf(),
        y in leaf(),
        swap in any::<bool>()
    ) {
        let a = FlexiBean::new().with("x", x.clone()).with("y", y.clone());
        let b = if swap {
            FlexiBean::new().with("y", y).with("x", x)
        } else {
            FlexiBean::new().with("x", x).with("y", Value::Null)
        };
        prop_assert!(utils::properties_equal(&a, &a));
        let forward = utils::properties_equal(&a, &b);
        prop_assert_eq!(forward, utils::properties_equal(&b, &a));
        if forward {
            prop_assert_eq!(utils::properties_hash_code(&a), utils::properties_hash_code(&b));
        }
    }
}
