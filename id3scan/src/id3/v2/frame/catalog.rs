//! Every frame ID defined by ID3v2.3 and ID3v2.4

use super::FrameId;

macro_rules! frame_ids {
	(
		v24 { $($v4_id:ident => $v4_desc:literal),+ $(,)? }
		v23 { $($v3_id:ident => $v3_desc:literal),+ $(,)? }
	) => {
		impl FrameId {
			$(
				#[doc = concat!("`", stringify!($v4_id), "`: ", $v4_desc)]
				pub const $v4_id: FrameId = FrameId::from_str_unchecked(stringify!($v4_id));
			)+
			$(
				#[doc = concat!("`", stringify!($v3_id), "`: ", $v3_desc, " (ID3v2.3 only)")]
				pub const $v3_id: FrameId = FrameId::from_str_unchecked(stringify!($v3_id));
			)+

			/// A short description of the frame, if it is a standard ID3v2.3 or ID3v2.4 frame
			///
			/// # Examples
			///
			/// ```rust
			/// use id3scan::id3::v2::FrameId;
			///
			/// assert_eq!(FrameId::TIT2.description(), Some("Title/songname/content description"));
			/// assert_eq!(FrameId::TYER.description(), Some("Year"));
			/// assert_eq!(FrameId::new(*b"XYZ1").unwrap().description(), None);
			/// ```
			pub fn description(&self) -> Option<&'static str> {
				match *self {
					$(Self::$v4_id => Some($v4_desc),)+
					$(Self::$v3_id => Some($v3_desc),)+
					_ => None,
				}
			}

			/// Whether the frame was removed in ID3v2.4
			pub fn is_v23_only(&self) -> bool {
				matches!(*self, $(Self::$v3_id)|+)
			}
		}
	};
}

impl FrameId {
	const fn from_str_unchecked(id: &str) -> Self {
		let id = id.as_bytes();
		Self::from_bytes_unchecked([id[0], id[1], id[2], id[3]])
	}
}

frame_ids! {
	v24 {
		AENC => "Audio encryption",
		APIC => "Attached picture",
		ASPI => "Audio seek point index",
		COMM => "Comments",
		COMR => "Commercial frame",
		ENCR => "Encryption method registration",
		EQU2 => "Equalisation (2)",
		ETCO => "Event timing codes",
		GEOB => "General encapsulated object",
		GRID => "Group identification registration",
		LINK => "Linked information",
		MCDI => "Music CD identifier",
		MLLT => "MPEG location lookup table",
		OWNE => "Ownership frame",
		PRIV => "Private frame",
		PCNT => "Play counter",
		POPM => "Popularimeter",
		POSS => "Position synchronisation frame",
		RBUF => "Recommended buffer size",
		RVA2 => "Relative volume adjustment (2)",
		RVRB => "Reverb",
		SEEK => "Seek frame",
		SIGN => "Signature frame",
		SYLT => "Synchronised lyric/text",
		SYTC => "Synchronised tempo codes",
		TALB => "Album/Movie/Show title",
		TBPM => "BPM (beats per minute)",
		TCOM => "Composer",
		TCON => "Content type",
		TCOP => "Copyright message",
		TDEN => "Encoding time",
		TDLY => "Playlist delay",
		TDOR => "Original release time",
		TDRC => "Recording time",
		TDRL => "Release time",
		TDTG => "Tagging time",
		TENC => "Encoded by",
		TEXT => "Lyricist/Text writer",
		TFLT => "File type",
		TIPL => "Involved people list",
		TIT1 => "Content group description",
		TIT2 => "Title/songname/content description",
		TIT3 => "Subtitle/Description refinement",
		TKEY => "Initial key",
		TLAN => "Language(s)",
		TLEN => "Length",
		TMCL => "Musician credits list",
		TMED => "Media type",
		TMOO => "Mood",
		TOAL => "Original album/movie/show title",
		TOFN => "Original filename",
		TOLY => "Original lyricist(s)/text writer(s)",
		TOPE => "Original artist(s)/performer(s)",
		TOWN => "File owner/licensee",
		TPE1 => "Lead performer(s)/Soloist(s)",
		TPE2 => "Band/orchestra/accompaniment",
		TPE3 => "Conductor/performer refinement",
		TPE4 => "Interpreted, remixed, or otherwise modified by",
		TPOS => "Part of a set",
		TPRO => "Produced notice",
		TPUB => "Publisher",
		TRCK => "Track number/Position in set",
		TRSN => "Internet radio station name",
		TRSO => "Internet radio station owner",
		TSOA => "Album sort order",
		TSOP => "Performer sort order",
		TSOT => "Title sort order",
		TSRC => "ISRC (international standard recording code)",
		TSSE => "Software/Hardware and settings used for encoding",
		TSST => "Set subtitle",
		TXXX => "User defined text information frame",
		UFID => "Unique file identifier",
		USER => "Terms of use",
		USLT => "Unsynchronised lyric/text transcription",
		WCOM => "Commercial information",
		WCOP => "Copyright/Legal information",
		WOAF => "Official audio file webpage",
		WOAR => "Official artist/performer webpage",
		WOAS => "Official audio source webpage",
		WORS => "Official Internet radio station homepage",
		WPAY => "Payment",
		WPUB => "Publishers official webpage",
		WXXX => "User defined URL link frame",
	}
	v23 {
		EQUA => "Equalization",
		IPLS => "Involved people list",
		RVAD => "Relative volume adjustment",
		TDAT => "Date",
		TIME => "Time",
		TORY => "Original release year",
		TRDA => "Recording dates",
		TSIZ => "Size",
		TYER => "Year",
	}
}
