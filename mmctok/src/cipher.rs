/// Seed permutation for the key schedule. Runs 255 down to 0 — the upstream
/// algorithm seeds its table reversed, and an identity seed produces an
/// incompatible keystream.
pub fn initial_table() -> [u8; 256] {
    let mut table = [0; 256];
    for (i, slot) in table.iter_mut().enumerate() {
        *slot = 255 - i as u8;
    }
    table
}

/// Byte-stream cipher state: a scheduled permutation table plus the two
/// stream pointers. Index arithmetic stays in `u8`, so every table access is
/// in range by construction.
pub struct Keystream {
    table: [u8; 256],
    i: u8,
    j: u8,
}

impl Keystream {
    /// Build a reversed-seed table and mix `key` into it. Fails on an empty
    /// key before the table is touched.
    pub fn new(key: &[u8]) -> Result<Self, super::Error> {
        if key.is_empty() {
            return Err(super::Error::InvalidKey);
        }
        let mut table = initial_table();
        let mut j = 0u8;
        for i in 0..256 {
            j = j
                .wrapping_add(table[i])
                .wrapping_add(key[i % key.len()]);
            table.swap(i, j as usize);
        }
        Ok(Keystream { table, i: 0, j: 0 })
    }

    /// XOR `data` against the keystream, one fresh pass over the table.
    ///
    /// Consumes the generator: a table that has streamed once cannot be
    /// rewound, so the inverse direction needs a `Keystream` rebuilt from
    /// the same key.
    pub fn apply(mut self, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::with_capacity(data.len());
        for &byte in data {
            out.push(byte ^ self.next_byte());
        }
        out
    }

    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.table[self.i as usize]);
        self.table.swap(self.i as usize, self.j as usize);
        let sum = self.table[self.i as usize].wrapping_add(self.table[self.j as usize]);
        self.table[sum as usize]
    }
}
