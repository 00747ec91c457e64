use proptest::prelude::*;
use sswap_core::Literal;
use sswap_model::{Capability, Datatype, Element, List, SemanticElement, SourceModel};

fn slots(values: &[Option<i64>]) -> Vec<Option<Element>> {
    values
        .iter()
        .map(|v| v.map(|n| Element::from(Literal::integer(n))))
        .collect()
}

proptest! {
    #[test]
    fn list_preserves_insertion_order(values in prop::collection::vec(prop::option::of(-50i64..50), 0..32)) {
        let list: List = slots(&values).into_iter().collect();
        prop_assert_eq!(list.len(), values.len());
        let read: Vec<Option<Element>> = list.iter().collect();
        prop_assert_eq!(read, slots(&values));
    }

    #[test]
    fn lists_from_same_input_are_equal_without_identity(values in prop::collection::vec(prop::option::of(any::<i64>()), 0..16)) {
        let a: List = slots(&values).into_iter().collect();
        let b: List = slots(&values).into_iter().collect();
        prop_assert!(a.rdf_id().is_none());
        prop_assert!(b.rdf_id().is_none());
        prop_assert!(!a.ptr_eq(&b));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn list_capability_aliases_original(values in prop::collection::vec(prop::option::of(-50i64..50), 0..16), extra in any::<i64>()) {
        let list: List = slots(&values).into_iter().collect();
        let viewed = list.probe(Capability::List).unwrap();
        viewed.as_list().unwrap().push(Literal::integer(extra));
        prop_assert_eq!(list.len(), values.len() + 1);
        prop_assert_eq!(list.get(values.len()).unwrap(), Some(Element::from(Literal::integer(extra))));
    }

    #[test]
    fn index_of_finds_first_and_last(values in prop::collection::vec(0i64..5, 1..24), probe in 0i64..5) {
        let list: List = slots(&values.iter().copied().map(Some).collect::<Vec<_>>()).into_iter().collect();
        let needle = Element::from(Literal::integer(probe));
        prop_assert_eq!(list.index_of(Some(&needle)), values.iter().position(|v| *v == probe));
        prop_assert_eq!(list.last_index_of(Some(&needle)), values.iter().rposition(|v| *v == probe));
    }

    #[test]
    fn one_of_round_trips_in_order(values in prop::collection::vec("[a-z]{1,8}", 0..12)) {
        let model = SourceModel::builder().build().unwrap();
        let datatype = Datatype::new(&model, None).unwrap();
        let literals: Vec<Literal> = values.iter().map(|v| Literal::string(v.as_str())).collect();
        datatype.add_one_of(&literals).unwrap();
        prop_assert_eq!(datatype.one_of().unwrap(), literals);
    }
}
