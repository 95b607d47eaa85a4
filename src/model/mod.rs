/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
/// Authentication response parsing
pub mod auth;
/// Session dispatcher and status handling
pub mod http;
/// Request descriptors and resource categories
pub mod requests;
/// Response values and fault bodies
pub mod responses;
