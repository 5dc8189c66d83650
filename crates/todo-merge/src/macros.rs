/// Implement [`Patch`](crate::Patch) for a patch struct and
/// [`MergeNonNull`](crate::MergeNonNull) for its target from one field list.
///
/// - `required` fields are plain `T` on the target; a `Some(v)` on the patch
///   replaces the value.
/// - `optional` fields are `Option<T>` on the target; a `Some(v)` on the patch
///   becomes `Some(v)` on the target. `None` on the patch never clears it.
///
/// The patch type must be a struct name in scope. Its fields are
/// destructured without `..`, so the two lists together must name every one
/// of them.
#[macro_export]
macro_rules! impl_merge_non_null {
    (
        $source:ident => $target:ty {
            required: [$($req:ident),* $(,)?],
            optional: [$($opt:ident),* $(,)?] $(,)?
        }
    ) => {
        impl $crate::Patch for $source {
            const FIELDS: &'static [&'static str] = &[
                $(stringify!($req),)*
                $(stringify!($opt),)*
            ];

            fn null_fields(&self) -> ::std::vec::Vec<&'static str> {
                let $source { $($req,)* $($opt,)* } = self;
                let mut nulls = ::std::vec::Vec::new();
                $(
                    if $req.is_none() {
                        nulls.push(stringify!($req));
                    }
                )*
                $(
                    if $opt.is_none() {
                        nulls.push(stringify!($opt));
                    }
                )*
                nulls
            }
        }

        impl $crate::MergeNonNull<$source> for $target {
            fn merge_non_null(&mut self, patch: &$source) -> $crate::MergeReport {
                let $source { $($req,)* $($opt,)* } = patch;
                let mut report = $crate::MergeReport::default();
                $(
                    match $req {
                        ::std::option::Option::Some(value) => {
                            self.$req = ::std::clone::Clone::clone(value);
                            report.record_applied(stringify!($req));
                        }
                        ::std::option::Option::None => report.record_skipped(stringify!($req)),
                    }
                )*
                $(
                    match $opt {
                        ::std::option::Option::Some(value) => {
                            self.$opt = ::std::option::Option::Some(::std::clone::Clone::clone(value));
                            report.record_applied(stringify!($opt));
                        }
                        ::std::option::Option::None => report.record_skipped(stringify!($opt)),
                    }
                )*
                report
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{merge_non_null, MergeNonNull, Patch};
    use proptest::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Card {
        name: String,
        count: u32,
        tag: Option<String>,
        locked: bool,
    }

    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    struct CardPatch {
        name: Option<String>,
        count: Option<u32>,
        tag: Option<String>,
    }

    crate::impl_merge_non_null!(CardPatch => Card {
        required: [name, count],
        optional: [tag],
    });

    fn card() -> Card {
        Card {
            name: "inbox".into(),
            count: 3,
            tag: Some("home".into()),
            locked: true,
        }
    }

    fn arb_card() -> impl Strategy<Value = Card> {
        (
            any::<String>(),
            any::<u32>(),
            proptest::option::of(any::<String>()),
            any::<bool>(),
        )
            .prop_map(|(name, count, tag, locked)| Card { name, count, tag, locked })
    }

    fn arb_patch() -> impl Strategy<Value = CardPatch> {
        (
            proptest::option::of(any::<String>()),
            proptest::option::of(any::<u32>()),
            proptest::option::of(any::<String>()),
        )
            .prop_map(|(name, count, tag)| CardPatch { name, count, tag })
    }

    // -----------------------------------------------------------------------
    // Field discovery
    // -----------------------------------------------------------------------

    #[test]
    fn fields_in_declared_order() {
        assert_eq!(CardPatch::FIELDS, ["name", "count", "tag"]);
    }

    #[test]
    fn null_fields_of_empty_patch() {
        let patch = CardPatch::default();
        assert_eq!(patch.null_fields(), ["name", "count", "tag"]);
        assert!(patch.present_fields().is_empty());
        assert!(patch.is_empty());
    }

    #[test]
    fn null_fields_of_partial_patch() {
        let patch = CardPatch { count: Some(9), ..Default::default() };
        assert_eq!(patch.null_fields(), ["name", "tag"]);
        assert_eq!(patch.present_fields(), ["count"]);
        assert!(!patch.is_empty());
    }

    // -----------------------------------------------------------------------
    // Merging
    // -----------------------------------------------------------------------

    #[test]
    fn empty_patch_leaves_target_unchanged() {
        let mut target = card();
        let report = merge_non_null(&CardPatch::default(), &mut target);
        assert_eq!(target, card());
        assert!(report.is_noop());
        assert_eq!(report.skipped(), ["name", "count", "tag"]);
    }

    #[test]
    fn full_patch_overwrites_listed_fields_only() {
        let mut target = card();
        let patch = CardPatch {
            name: Some("work".into()),
            count: Some(0),
            tag: Some("office".into()),
        };
        let report = target.merge_non_null(&patch);
        assert_eq!(target.name, "work");
        assert_eq!(target.count, 0);
        assert_eq!(target.tag.as_deref(), Some("office"));
        assert!(target.locked, "unlisted field must be untouched");
        assert_eq!(report.applied(), ["name", "count", "tag"]);
    }

    #[test]
    fn optional_field_filled_when_target_empty() {
        let mut target = Card { tag: None, ..card() };
        let patch = CardPatch { tag: Some("new".into()), ..Default::default() };
        merge_non_null(&patch, &mut target);
        assert_eq!(target.tag.as_deref(), Some("new"));
    }

    #[test]
    fn none_never_clears_optional_field() {
        let mut target = card();
        merge_non_null(&CardPatch { name: Some("x".into()), ..Default::default() }, &mut target);
        assert_eq!(target.tag.as_deref(), Some("home"));
    }

    proptest! {
        #[test]
        fn all_null_source_is_noop(target in arb_card()) {
            let mut merged = target.clone();
            merge_non_null(&CardPatch::default(), &mut merged);
            prop_assert_eq!(merged, target);
        }

        #[test]
        fn single_field_patch_touches_only_that_field(target in arb_card(), count in any::<u32>()) {
            let mut merged = target.clone();
            merge_non_null(&CardPatch { count: Some(count), ..Default::default() }, &mut merged);
            prop_assert_eq!(merged.count, count);
            prop_assert_eq!(&merged.name, &target.name);
            prop_assert_eq!(&merged.tag, &target.tag);
            prop_assert_eq!(merged.locked, target.locked);
        }

        #[test]
        fn disjoint_merges_compose(target in arb_card(), name in any::<String>(), tag in any::<String>()) {
            let first = CardPatch { name: Some(name.clone()), ..Default::default() };
            let second = CardPatch { tag: Some(tag.clone()), ..Default::default() };
            let mut merged = target.clone();
            merge_non_null(&first, &mut merged);
            merge_non_null(&second, &mut merged);
            prop_assert_eq!(merged.name, name);
            prop_assert_eq!(merged.tag, Some(tag));
            prop_assert_eq!(merged.count, target.count);
            prop_assert_eq!(merged.locked, target.locked);
        }

        #[test]
        fn merge_is_idempotent(target in arb_card(), patch in arb_patch()) {
            let mut once = target.clone();
            merge_non_null(&patch, &mut once);
            let mut twice = once.clone();
            merge_non_null(&patch, &mut twice);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn report_matches_null_set(target in arb_card(), patch in arb_patch()) {
            let mut merged = target;
            let report = merge_non_null(&patch, &mut merged);
            let nulls = patch.null_fields();
            let present = patch.present_fields();
            prop_assert_eq!(report.skipped(), nulls.as_slice());
            prop_assert_eq!(report.applied(), present.as_slice());
        }
    }
}
