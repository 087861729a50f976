//!  Delulu Airports Agent
//!
//!  Copyright (C) 2026  Mamy Ratsimbazafy
//!
//!  This program is free software: you can redistribute it and/or modify
//!  it under the terms of the GNU Affero General Public License as published by
//!  the Free Software Foundation, either version 3 of the License, or
//!  (at your option) any later version.
//!
//!  This program is distributed in the hope that it will be useful,
//!  but WITHOUT ANY WARRANTY; without even the implied warranty of
//!  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
//!  GNU Affero General Public License for more details.
//!
//!  You should have received a copy of the GNU Affero General Public License
//!  along with this program.  If not, see <http://www.gnu.org/licenses/>.

// Library for delulu-airports-agent
// Airport lookup shared by the CLI and the MCP server

mod airports_search;
mod server_status;

pub use airports_search::{
    find_airports, lookup_airport, open_index, AirportHit, AirportSearchRequest,
    AirportSearchResponse, LoadedIndex, RequestError, MAX_LIMIT,
};
pub use server_status::ServerStatus;

// Re-export the index types collaborators need
pub use delulu_airport_index::{
    Airport, AirportIndex, DataIntegrityError, InvalidQueryError, MatchTier, MatchedField,
    DEFAULT_LIMIT,
};
