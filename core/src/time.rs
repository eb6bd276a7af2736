// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Time related utils.

use chrono::Utc;

use crate::Error;

/// DateTime in UTC.
pub type DateTime = chrono::DateTime<Utc>;

/// Get current time in UTC.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a time into a date stamp: `20220313`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format a time into ISO8601 basic format: `20220313T072004Z`
///
/// No colons, dashes or fractional seconds; the wire format requires this
/// shape byte for byte.
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Parse an RFC3339 string like `2022-03-13T07:20:04Z` into DateTime.
pub fn parse_rfc3339(s: &str) -> crate::Result<DateTime> {
    let t = chrono::DateTime::parse_from_rfc3339(s)
        .map_err(|e| Error::unexpected(format!("parse '{s}' as rfc3339 failed")).with_source(e))?;
    Ok(t.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let t = parse_rfc3339("2022-03-13T07:20:04Z").expect("must parse");
        assert_eq!(format_date(t), "20220313");
        assert_eq!(format_iso8601(t), "20220313T072004Z");
    }

    #[test]
    fn test_parse_rfc3339_invalid() {
        assert!(parse_rfc3339("20220313T072004Z").is_err());
    }
}
