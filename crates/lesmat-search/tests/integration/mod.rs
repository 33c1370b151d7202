mod catalog_search;
mod detail_navigation;
mod url_state;
