/// Full-table enumeration.
///
/// Some hosts only expose single-name lookups. Those return `None` here,
/// which callers surface as a configuration problem rather than as an
/// empty table. Values are read back through [`ReadEnv`](super::ReadEnv)
/// so a listed name resolves exactly like a direct lookup.
pub trait ListEnv {
    fn var_names(&self) -> Option<Vec<String>>;

    /// Override when the check is cheaper than listing every name.
    fn is_listable(&self) -> bool {
        self.var_names().is_some()
    }
}

impl<T: ListEnv + ?Sized> ListEnv for &T {
    #[inline]
    fn var_names(&self) -> Option<Vec<String>> {
        (**self).var_names()
    }

    #[inline]
    fn is_listable(&self) -> bool {
        (**self).is_listable()
    }
}
