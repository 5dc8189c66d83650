use crate::report::MergeReport;

/// A partial value: a struct whose fields are all optional.
///
/// Implemented by [`impl_merge_non_null!`](crate::impl_merge_non_null).
pub trait Patch {
    /// Every field name, in the order the field list declares them.
    const FIELDS: &'static [&'static str];

    /// Names of the fields currently holding `None`.
    fn null_fields(&self) -> Vec<&'static str>;

    /// Names of the fields currently holding a value.
    fn present_fields(&self) -> Vec<&'static str> {
        let nulls = self.null_fields();
        Self::FIELDS
            .iter()
            .copied()
            .filter(|name| !nulls.contains(name))
            .collect()
    }

    /// Returns `true` if no field holds a value; merging it is a no-op.
    fn is_empty(&self) -> bool {
        self.null_fields().len() == Self::FIELDS.len()
    }
}

/// A target that can absorb the non-null fields of a patch `P`.
pub trait MergeNonNull<P: Patch> {
    /// Copy every non-null field of `patch` onto `self`.
    ///
    /// Fields that are `None` on the patch keep their current value.
    fn merge_non_null(&mut self, patch: &P) -> MergeReport;
}

/// Copy every non-null field of `source` onto `target`, in place.
pub fn merge_non_null<P, T>(source: &P, target: &mut T) -> MergeReport
where
    P: Patch,
    T: MergeNonNull<P> + ?Sized,
{
    target.merge_non_null(source)
}
