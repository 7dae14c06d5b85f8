// MIT LICENSE
//
// Copyright (c) 2021 Dash Core Group
//
// Permission is hereby granted, free of charge, to any
// person obtaining a copy of this software and associated
// documentation files (the "Software"), to deal in the
// Software without restriction, including without
// limitation the rights to use, copy, modify, merge,
// publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software
// is furnished to do so, subject to the following
// conditions:
//
// The above copyright notice and this permission notice
// shall be included in all copies or substantial portions
// of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF
// ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED
// TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A
// PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT
// SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY
// CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR
// IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
// DEALINGS IN THE SOFTWARE.

//! Storage context implementation without a transaction.

use rocksdb::OptimisticTransactionDB;

use super::make_prefixed_key;
use crate::{Error, StorageContext, SubtreePrefix};

/// Storage context with a prefix applied to be used in a subtree. Every write
/// is applied to the database immediately.
pub struct PrefixedRocksDbStorageContext<'db> {
    storage: &'db OptimisticTransactionDB,
    prefix: SubtreePrefix,
}

impl<'db> PrefixedRocksDbStorageContext<'db> {
    /// Create a new prefixed storage context instance
    pub fn new(storage: &'db OptimisticTransactionDB, prefix: SubtreePrefix) -> Self {
        PrefixedRocksDbStorageContext { storage, prefix }
    }
}

impl<'db> StorageContext<'db> for PrefixedRocksDbStorageContext<'db> {
    fn put<K: AsRef<[u8]>>(&self, key: K, value: &[u8]) -> Result<(), Error> {
        Ok(self
            .storage
            .put(make_prefixed_key(&self.prefix, key), value)?)
    }

    fn get<K: AsRef<[u8]>>(&self, key: K) -> Result<Option<Vec<u8>>, Error> {
        Ok(self.storage.get(make_prefixed_key(&self.prefix, key))?)
    }
}
