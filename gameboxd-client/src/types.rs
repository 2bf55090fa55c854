use std::fmt;
use std::str::FromStr;

/// One of the curated game lists on the catalog's home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feed {
    TopRated,
    Upcoming,
    Popular,
    Recent,
    Shooter,
}

impl Feed {
    /// Every feed, in home-page order.
    pub const ALL: [Feed; 5] = [
        Feed::TopRated,
        Feed::Upcoming,
        Feed::Popular,
        Feed::Recent,
        Feed::Shooter,
    ];

    /// Short name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Feed::TopRated => "top-rated",
            Feed::Upcoming => "upcoming",
            Feed::Popular => "popular",
            Feed::Recent => "recent",
            Feed::Shooter => "shooter",
        }
    }

    /// Section heading shown above the feed.
    pub fn title(self) -> &'static str {
        match self {
            Feed::TopRated => "Top Rated Games",
            Feed::Upcoming => "Upcoming Games",
            Feed::Popular => "Popular Games",
            Feed::Recent => "New Games",
            Feed::Shooter => "Shooter Games",
        }
    }

    /// Request path relative to the catalog base URL.
    pub fn path(self) -> &'static str {
        match self {
            Feed::TopRated | Feed::Shooter => "/games/games",
            Feed::Upcoming => "/games/upcoming",
            Feed::Popular => "/games/popular",
            Feed::Recent => "/games/recent",
        }
    }

    /// Value of the `filters` query parameter, for feeds served by the
    /// generic filter endpoint.
    ///
    /// Order is time, genre, platform, ESRB, sort.
    pub fn filters(self) -> Option<&'static str> {
        match self {
            Feed::TopRated => Some("Any Time,Any Genre,Any Platform,Any ESRB,Top Rated Games"),
            Feed::Shooter => Some("Any Time,Shooter,Any Platform,Any ESRB,Any Sort"),
            Feed::Upcoming | Feed::Popular | Feed::Recent => None,
        }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown feed '{0}' (expected one of: top-rated, upcoming, popular, recent, shooter)")]
pub struct UnknownFeed(pub String);

impl FromStr for Feed {
    type Err = UnknownFeed;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "top-rated" | "toprated" | "top" => Ok(Feed::TopRated),
            "upcoming" => Ok(Feed::Upcoming),
            "popular" => Ok(Feed::Popular),
            "recent" | "new" => Ok(Feed::Recent),
            "shooter" | "shooters" => Ok(Feed::Shooter),
            _ => Err(UnknownFeed(s.to_string())),
        }
    }
}
