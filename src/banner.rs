// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Text banner rendering.
//!
//! Purely cosmetic. The session prints whatever this returns above the
//! catalog; replacing it with a plain header changes no behavior.

/// Renders `title` centered in an asterisk frame `width` columns wide.
///
/// The width is clamped so the frame always fits the title. The returned
/// string has no trailing newline.
pub fn render(title: &str, width: usize) -> String {
    let title_len = title.chars().count();
    let width = width.max(title_len + 4);
    let inner = width - 2;

    let pad = inner - title_len;
    let left = pad / 2;
    let right = pad - left;

    let border = "*".repeat(width);
    format!(
        "{border}\n*{}{title}{}*\n{border}",
        " ".repeat(left),
        " ".repeat(right)
    )
}
