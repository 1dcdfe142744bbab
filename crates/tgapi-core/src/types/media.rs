//! Files, media and geo records.

use crate::codec::macros::record;

record! {
    /// One size of a photo or a file/sticker thumbnail.
    pub struct PhotoSize {
        req file_id: String => "file_id",
        req width: i64 => "width",
        req height: i64 => "height",
        opt file_size: i64 => "file_size",
    }
}

record! {
    pub struct Audio {
        req file_id: String => "file_id",
        req duration: i64 => "duration",
        opt performer: String => "performer",
        opt title: String => "title",
        opt mime_type: String => "mime_type",
        opt file_size: i64 => "file_size",
    }
}

record! {
    pub struct Document {
        req file_id: String => "file_id",
        opt thumb: PhotoSize => "thumb",
        opt file_name: String => "file_name",
        opt mime_type: String => "mime_type",
        opt file_size: i64 => "file_size",
    }
}

record! {
    pub struct Sticker {
        req file_id: String => "file_id",
        req width: i64 => "width",
        req height: i64 => "height",
        opt thumb: PhotoSize => "thumb",
        opt emoji: String => "emoji",
        opt file_size: i64 => "file_size",
    }
}

record! {
    pub struct Video {
        req file_id: String => "file_id",
        req width: i64 => "width",
        req height: i64 => "height",
        req duration: i64 => "duration",
        opt thumb: PhotoSize => "thumb",
        opt mime_type: String => "mime_type",
        opt file_size: i64 => "file_size",
    }
}

record! {
    pub struct Voice {
        req file_id: String => "file_id",
        req duration: i64 => "duration",
        opt mime_type: String => "mime_type",
        opt file_size: i64 => "file_size",
    }
}

record! {
    /// Round video message.
    pub struct VideoNote {
        req file_id: String => "file_id",
        /// Diameter of the video.
        req length: i64 => "length",
        req duration: i64 => "duration",
        opt thumb: PhotoSize => "thumb",
        opt file_size: i64 => "file_size",
    }
}

record! {
    /// Animation shown inside a game.
    pub struct Animation {
        req file_id: String => "file_id",
        opt thumb: PhotoSize => "thumb",
        opt file_name: String => "file_name",
        opt mime_type: String => "mime_type",
        opt file_size: i64 => "file_size",
    }
}

record! {
    pub struct Contact {
        req phone_number: String => "phone_number",
        req first_name: String => "first_name",
        opt last_name: String => "last_name",
        opt user_id: i64 => "user_id",
    }
}

record! {
    pub struct Location {
        req longitude: f64 => "longitude",
        req latitude: f64 => "latitude",
    }
}

record! {
    pub struct Venue {
        req location: Location => "location",
        req title: String => "title",
        req address: String => "address",
        opt foursquare_id: String => "foursquare_id",
    }
}

record! {
    pub struct UserProfilePhotos {
        req total_count: i64 => "total_count",
        /// Up to four sizes of each profile photo.
        req photos: Vec<Vec<PhotoSize>> => "photos",
    }
}

record! {
    /// A file ready to be downloaded via `file_path`.
    pub struct File {
        req file_id: String => "file_id",
        opt file_size: i64 => "file_size",
        opt file_path: String => "file_path",
    }
}
