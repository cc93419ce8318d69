#[cfg(test)]
mod test {
    use crate::dir::{Dir, DirError, MAX_BINARY_LEN};
    use crate::idr::{
        DecodeError, Decoder, EncodeError, Encoder, Tag, TagInt, Timestamp, Zone,
    };
    use anyhow::Result;
    use chrono::{FixedOffset, TimeZone, Utc};
    use num_complex::{Complex32, Complex64};

    /// 2023-10-06T10:00:00Z
    const SECS: i64 = 1696586400;

    fn encoded(f: impl FnOnce(&mut Encoder)) -> Vec<u8> {
        let mut enc = Encoder::new();
        f(&mut enc);
        enc.into()
    }

    #[test]
    fn fixed_width() -> Result<()> {
        let buf = encoded(|e| {
            e.put_u8(0xAB);
            e.put_u16(0x1234);
            e.put_u32(0xDEADBEEF);
            e.put_u64(1);
            e.put_i8(-1);
            e.put_i16(-2);
            e.put_i32(-2);
            e.put_i64(i64::MIN);
            e.put_f32(1.0);
            e.put_f64(1.0);
            e.put_complex64(Complex32::new(1.0, -1.0));
            e.put_bool(true);
        });
        #[rustfmt::skip]
        assert_eq!(
            buf,
            [
                0xAB,
                0x34, 0x12,
                0xEF, 0xBE, 0xAD, 0xDE,
                1, 0, 0, 0, 0, 0, 0, 0,
                0xFF,
                0xFE, 0xFF,
                0xFE, 0xFF, 0xFF, 0xFF,
                0, 0, 0, 0, 0, 0, 0, 0x80,
                0, 0, 0x80, 0x3F,
                0, 0, 0, 0, 0, 0, 0xF0, 0x3F,
                0, 0, 0x80, 0x3F, 0, 0, 0x80, 0xBF,
                1,
            ]
        );

        let mut dec = Decoder::new(&buf);
        assert_eq!(dec.get_u8()?, 0xAB);
        assert_eq!(dec.get_u16()?, 0x1234);
        assert_eq!(dec.get_u32()?, 0xDEADBEEF);
        assert_eq!(dec.get_u64()?, 1);
        assert_eq!(dec.get_i8()?, -1);
        assert_eq!(dec.get_i16()?, -2);
        assert_eq!(dec.get_i32()?, -2);
        assert_eq!(dec.get_i64()?, i64::MIN);
        assert_eq!(dec.get_f32()?, 1.0);
        assert_eq!(dec.get_f64()?, 1.0);
        assert_eq!(dec.get_complex64()?, Complex32::new(1.0, -1.0));
        assert!(dec.get_bool()?);
        assert!(dec.is_empty());
        assert_eq!(dec.pos(), buf.len());
        Ok(())
    }

    #[test]
    fn variable_width() -> Result<()> {
        let buf = encoded(|e| {
            e.put_size(12345);
            e.put_tag(Tag::VarTime);
            e.put_tag(TagInt::from(300));
            e.put_var_int(-1);
            e.put_var_int(63);
            e.put_var_float(2.0);
            e.put_var_complex(Complex64::new(2.0, -2.0));
        });
        #[rustfmt::skip]
        assert_eq!(
            buf,
            [
                0xB9, 0x60,
                25,
                0xAC, 0x02,
                0x01,
                0x7E,
                0x40,
                0x40, 0xC0, 0x01,
            ]
        );

        let mut dec = Decoder::new(&buf);
        assert_eq!(dec.get_size()?, 12345);
        assert_eq!(Tag::try_from(dec.get_tag()?)?, Tag::VarTime);
        assert_eq!(dec.get_tag()?, TagInt::from(300));
        assert_eq!(dec.get_var_int()?, -1);
        assert_eq!(dec.get_var_int()?, 63);
        assert_eq!(dec.get_var_float()?, 2.0);
        assert_eq!(dec.get_var_complex()?, Complex64::new(2.0, -2.0));
        assert!(dec.is_empty());

        let mut dec = Decoder::new(&[0xFF; 9]);
        assert_eq!(dec.clone().get_var_uint()?, u64::MAX);
        #[cfg(target_pointer_width = "64")]
        assert_eq!(dec.get_var_usize()?, usize::MAX);
        Ok(())
    }

    #[test]
    fn length_prefixed() -> Result<()> {
        let dir = Dir::new(&[1, 2, 3, 4, 5, 6, 7])?;
        let buf = encoded(|e| {
            e.put_blob(b"abc");
            e.put_string("héllo");
            e.put_dir(&dir);
            e.put_dir(&Dir::default());
            e.put_bytes(&[9, 9]);
        });
        #[rustfmt::skip]
        assert_eq!(
            buf,
            [
                3, b'a', b'b', b'c',
                6, b'h', 0xC3, 0xA9, b'l', b'l', b'o',
                7, 1, 2, 3, 4, 5, 6, 7,
                0,
                9, 9,
            ]
        );

        let mut dec = Decoder::new(&buf);
        assert_eq!(dec.get_blob(3)?, b"abc");
        assert_eq!(dec.get_str(100)?, "héllo");
        assert_eq!(dec.get_dir()?, dir);
        assert!(dec.get_dir()?.is_nil());
        assert_eq!(dec.get_bytes(2)?, &[9, 9]);
        assert!(dec.is_empty());
        Ok(())
    }

    #[test]
    fn longest_dir() -> Result<()> {
        let dir = Dir::new(&[u64::MAX; 7])?;
        let buf = encoded(|e| {
            e.put_dir(&dir);
        });
        assert_eq!(buf.len(), 1 + MAX_BINARY_LEN);
        assert_eq!(buf[0] as usize, MAX_BINARY_LEN);

        let mut dec = Decoder::new(&buf);
        assert_eq!(dec.skip_dir()?, buf.len());
        let mut dec = Decoder::new(&buf);
        assert_eq!(dec.get_dir()?, dir);
        Ok(())
    }

    #[test]
    fn time() -> Result<()> {
        let utc = Timestamp::from(Utc.with_ymd_and_hms(2023, 10, 6, 10, 0, 0).unwrap());
        assert_eq!(utc, Timestamp::utc(SECS, 0));

        let buf = encoded(|e| {
            e.put_time(&utc);
        });
        #[rustfmt::skip]
        assert_eq!(
            buf,
            [
                0xA0, 0xDA, 0x1F, 0x65, 0, 0, 0, 0,
                0, 0, 0, 0,
                0, 0, 0, 0,
            ]
        );
        assert_eq!(Decoder::new(&buf).get_time()?, utc);

        /* The fixed width form drops the zone name. */
        let est = Timestamp::fixed(SECS, 0, -18000, "EST");
        let buf = encoded(|e| {
            e.put_time(&est);
        });
        let got = Decoder::new(&buf).get_time()?;
        assert_eq!(got, Timestamp::fixed(SECS, 0, -18000, ""));
        assert!(got.same_instant(&est));

        let dt = got.to_datetime().unwrap();
        assert_eq!(dt.offset(), &FixedOffset::west_opt(18000).unwrap());
        assert_eq!(dt.timestamp(), SECS);
        Ok(())
    }

    #[test]
    fn var_time() -> Result<()> {
        let utc = Timestamp::utc(SECS, 0);
        let buf = encoded(|e| {
            e.put_var_time(&utc).unwrap();
        });
        assert_eq!(buf, [0x09, 0xC0, 0xEA, 0xFE, 0xD1, 0x0C, 0, 0, 0, 0]);
        assert_eq!(Decoder::new(&buf).get_var_time()?, utc);

        let offset = FixedOffset::east_opt(3600).unwrap();
        let local = offset
            .with_ymd_and_hms(2023, 10, 6, 10, 0, 0)
            .unwrap()
            .checked_add_signed(chrono::Duration::milliseconds(500))
            .unwrap();
        let plus_one = Timestamp::from(local);
        assert_eq!(plus_one.offset(), 3600);
        assert_eq!(plus_one.zone_name(), "");

        let buf = encoded(|e| {
            e.put_var_time(&plus_one).unwrap();
        });
        #[rustfmt::skip]
        assert_eq!(
            buf,
            [
                0x0C,
                0xA0, 0xB2, 0xFE, 0xD1, 0x0C,
                0x00, 0x65, 0xCD, 0x1D,
                0xA0, 0x38,
                0x00,
            ]
        );
        let got = Decoder::new(&buf).get_var_time()?;
        assert_eq!(got, plus_one);
        assert_eq!(got.to_datetime(), Some(local));

        let est = Timestamp::fixed(SECS, 0, -18000, "EST");
        let buf = encoded(|e| {
            e.put_var_time(&est).unwrap();
        });
        #[rustfmt::skip]
        assert_eq!(
            buf,
            [
                0x10,
                0xC0, 0xEA, 0xFE, 0xD1, 0x0C,
                0, 0, 0, 0,
                0x9F, 0x99, 0x02,
                3, b'E', b'S', b'T',
            ]
        );
        let got = Decoder::new(&buf).get_var_time()?;
        assert_eq!(got.zone, Zone::Fixed { offset: -18000, name: "EST".into() });
        Ok(())
    }

    #[test]
    fn var_time_too_long() {
        let mut enc = Encoder::from(vec![0xAA]);
        let t = Timestamp::fixed(SECS, 0, 3600, "x".repeat(300));
        assert!(matches!(
            enc.put_var_time(&t),
            Err(EncodeError::TimeTooLong(_))
        ));
        assert_eq!(enc.as_bytes(), &[0xAA]);

        /* The longest name that still fits. 5 + 4 + 2 + 2 + 242 == 255 */
        let t = Timestamp::fixed(SECS, 0, 3600, "x".repeat(242));
        assert_eq!(enc.put_var_time(&t).map(|w| *w), Ok(256));
    }

    #[test]
    fn rejections_leave_cursor() {
        let buf = [4, 1, 2, 3, 4];
        let mut dec = Decoder::new(&buf);
        assert_eq!(dec.get_blob(3), Err(DecodeError::TooLarge { len: 4, max: 3 }));
        assert_eq!(dec.pos(), 0);
        assert_eq!(dec.skip_blob(3), Err(DecodeError::TooLarge { len: 4, max: 3 }));
        assert_eq!(dec.pos(), 0);

        /* Length prefix beyond the end. */
        let buf = [5, 1, 2];
        let mut dec = Decoder::new(&buf);
        assert_eq!(dec.get_blob(10), Err(DecodeError::UnexpectedEof { offset: 1 }));
        assert_eq!(dec.pos(), 0);
        assert!(dec.skip_blob(10).is_err());
        assert_eq!(dec.pos(), 0);

        let buf = [2, 0xFF, 0xFE];
        let mut dec = Decoder::new(&buf);
        assert!(matches!(dec.get_str(10), Err(DecodeError::Utf8(_))));
        assert_eq!(dec.pos(), 0);
        assert!(matches!(dec.skip_string(10), Err(DecodeError::Utf8(_))));
        assert_eq!(dec.pos(), 0);
        assert_eq!(dec.skip_blob(10), Ok(3));
        let mut dec = Decoder::new(&[3, b'a', 0xC3, 0xA9]);
        assert_eq!(dec.skip_string(10), Ok(4));

        /* A Dir longer than seven identifiers. */
        let buf = [8, 1, 2, 3, 4, 5, 6, 7, 8];
        let mut dec = Decoder::new(&buf);
        assert_eq!(dec.get_dir(), Err(DecodeError::Dir(DirError::ExcessData)));
        assert_eq!(dec.pos(), 0);

        let buf = [64];
        let mut dec = Decoder::new(&buf);
        let too_large = DecodeError::TooLarge { len: 64, max: 63 };
        assert_eq!(dec.get_dir(), Err(too_large.clone()));
        assert_eq!(dec.skip_dir(), Err(too_large));

        let buf = [3, 1, 0, 2];
        let mut dec = Decoder::new(&buf);
        let mut dir = Dir::new(&[5, 6]).unwrap();
        assert_eq!(
            dec.get_dir_into(&mut dir),
            Err(DecodeError::Dir(DirError::ZeroIdentifier(1)))
        );
        assert!(dir.is_nil());
        assert_eq!(dec.pos(), 0);

        /* Truncated VarUint and fixed width. */
        let mut dec = Decoder::new(&[0x80, 0x80]);
        assert_eq!(dec.get_var_uint(), Err(DecodeError::UnexpectedEof { offset: 0 }));
        assert!(dec.skip_var_uint().is_err());
        let mut dec = Decoder::new(&[1, 2, 3]);
        assert!(dec.get_u32().is_err());
        assert!(dec.skip_u32().is_err());
        assert_eq!(dec.pos(), 0);
        let mut dec = Decoder::new(&[0, 0, 0x80, 0x3F, 0, 0]);
        assert!(dec.get_complex64().is_err());
        assert_eq!(dec.pos(), 0);
        assert!(dec.get_time().is_err());
        assert_eq!(dec.pos(), 0);
    }

    #[test]
    fn var_time_rejections() {
        /* UTC record followed by a stray byte: offset 0, then a missing name. */
        let buf = [0x0A, 0xC0, 0xEA, 0xFE, 0xD1, 0x0C, 0, 0, 0, 0, 0];
        let mut dec = Decoder::new(&buf);
        assert_eq!(
            dec.get_var_time(),
            Err(DecodeError::UnexpectedEof { offset: buf.len() })
        );
        assert_eq!(dec.pos(), 0);
        /* Framing is intact, so the skip succeeds. */
        assert_eq!(dec.skip_var_time(), Ok(buf.len()));

        /* Offsets inside a record count from the start of the input. */
        let mut prefixed = vec![0xEE];
        prefixed.extend_from_slice(&buf);
        let mut dec = Decoder::new(&prefixed);
        assert_eq!(dec.get_byte(), Ok(0xEE));
        assert_eq!(
            dec.get_var_time(),
            Err(DecodeError::UnexpectedEof { offset: prefixed.len() })
        );
        assert_eq!(dec.pos(), 1);

        /* A record cut short ahead of more data does not read past its end. */
        let buf = [0x06, 0xC0, 0xEA, 0xFE, 0xD1, 0x0C, 0, 0xFF, 0xFF, 0xFF];
        let mut dec = Decoder::new(&buf);
        assert_eq!(dec.get_var_time(), Err(DecodeError::UnexpectedEof { offset: 6 }));

        let buf = [0x0D, 0xC0, 0xEA, 0xFE, 0xD1, 0x0C, 0, 0, 0, 0, 0xA0, 0x38, 0, 0xEE];
        let mut dec = Decoder::new(&buf);
        assert_eq!(dec.get_var_time(), Err(DecodeError::TrailingTimeData(1)));
        assert_eq!(dec.pos(), 0);

        /* Offset does not fit in i32. */
        let mut enc = Encoder::new();
        enc.put_byte(0);
        enc.put_var_int(SECS);
        enc.put_u32(0);
        enc.put_var_int(i64::from(i32::MAX) + 1);
        enc.put_string("");
        let mut buf: Vec<u8> = enc.into();
        buf[0] = (buf.len() - 1) as u8;
        let mut dec = Decoder::new(&buf);
        assert_eq!(
            dec.get_var_time(),
            Err(DecodeError::ZoneOffset(i64::from(i32::MAX) + 1))
        );

        /* Declared length beyond the end. */
        let mut dec = Decoder::new(&[0x09, 0xC0, 0xEA]);
        assert!(dec.get_var_time().is_err());
        assert!(dec.skip_var_time().is_err());
        assert_eq!(dec.pos(), 0);
    }

    #[test]
    fn encoder_appends() {
        let mut enc = Encoder::from(vec![1, 2]);
        assert_eq!(*enc.put_u16(0x0403), 2);
        assert_eq!(enc.as_bytes(), &[1, 2, 3, 4]);
        assert_eq!(enc.len(), 4);

        enc.reset();
        assert!(enc.is_empty());
        assert_eq!(*enc.put_var_uint(u64::MAX), 9);
    }
}
