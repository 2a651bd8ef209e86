// Copyright 2025 the Frechet Explorer Authors
// SPDX-License-Identifier: Apache-2.0

//! Frechet Explorer: path input and free-space diagram rendering for
//! Fréchet distance results

fn main() -> anyhow::Result<()> {
    frechet_explorer::run()
}
