use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Builtin {
    pub name: &'static str,
    pub arity: usize,
}

lazy_static! {
    static ref BUILTINS: FnvHashMap<&'static str, Builtin> = {
        let mut m = FnvHashMap::default();
        m.insert(
            "print",
            Builtin {
                name: "print",
                arity: 1,
            },
        );
        m
    };
}

pub fn lookup(name: &str) -> Option<&'static Builtin> {
    BUILTINS.get(name)
}

/// Names of all builtin functions, sorted.
pub fn names() -> Vec<&'static str> {
    let mut names = BUILTINS.keys().copied().collect::<Vec<_>>();
    names.sort_unstable();
    names
}
