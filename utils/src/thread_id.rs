use std::{
    collections::hash_map::DefaultHasher,
    fmt,
    hash::{Hash, Hasher},
    thread::ThreadId,
};

/// Hash of an identifier, formatted as a `u64`.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct HashedId(u64);

impl HashedId {
    pub fn of<T>(id: &T) -> Self
        where T: Hash + ?Sized
    {
        let mut hasher = DefaultHasher::new();
        id.hash(&mut hasher);
        HashedId(hasher.finish())
    }

    pub const fn from_hash(hash: u64) -> Self {
        HashedId(hash)
    }

    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<HashedId> for u64 {
    fn from(id: HashedId) -> Self {
        id.0
    }
}

macro_rules! delegate_fmt {
    ($($trait_:ident),+ $(,)?) => {
        $(
            impl fmt::$trait_ for HashedId {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    fmt::$trait_::fmt(&self.0, f)
                }
            }
        )+
    };
}

delegate_fmt!(Display, Debug, LowerHex, UpperHex, Octal, Binary);

pub trait FormatId {
    fn formatted(&self) -> HashedId;
}

impl FormatId for ThreadId {
    #[inline]
    fn formatted(&self) -> HashedId {
        HashedId::of(self)
    }
}
