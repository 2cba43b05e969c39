//! Node status queries against peers sending broken replies

#[cfg(test)]
mod tests {
    use crate::e2e_tests::test_context::{workstation_names, TEST_MAC};
    use crate::e2e_tests::{ResponderBehavior, TestContext};
    use crate::error::{Error, ErrorKind};
    use crate::protocol::messages::{
        NameFlags, NbnsMessage, NodeName, NodeStatusResponse, OwnerNodeType, Statistics,
    };
    use bytes::Bytes;

    fn valid_reply(names: Vec<NodeName>) -> Vec<u8> {
        NodeStatusResponse::new(0, names, Statistics::with_unit_id(TEST_MAC))
            .unwrap()
            .serialize()
            .unwrap()
            .to_vec()
    }

    async fn query_with_raw(reply: Vec<u8>) -> Error {
        let mut ctx = TestContext::new(ResponderBehavior::Raw(Bytes::from(reply)))
            .await
            .unwrap();
        let target = ctx.target();
        let err = ctx.client.query(&target).await.unwrap_err();
        ctx.responder.finish().await.unwrap();
        err
    }

    #[tokio::test]
    async fn test_short_reply() {
        let err = query_with_raw(vec![0u8; 20]).await;
        assert!(matches!(err, Error::BufferTooSmall { .. }));
        assert_eq!(err.kind(), ErrorKind::Protocol);
    }

    #[tokio::test]
    async fn test_wrong_record_type() {
        let mut reply = valid_reply(workstation_names());
        // NB instead of NBSTAT
        reply[46] = 0x00;
        reply[47] = 0x20;
        let err = query_with_raw(reply).await;
        assert!(matches!(err, Error::UnexpectedRecordType(0x0020)));
        assert_eq!(err.code(), 0x105);
    }

    #[tokio::test]
    async fn test_inflated_name_count() {
        let mut reply = valid_reply(workstation_names());
        reply[56] = 5;
        let err = query_with_raw(reply).await;
        assert!(matches!(
            err,
            Error::LengthMismatch {
                num_names: 5,
                expected: 193,
                actual: 175
            }
        ));
    }

    #[tokio::test]
    async fn test_trailing_garbage() {
        let mut reply = valid_reply(workstation_names());
        reply.extend_from_slice(&[0xEE; 3]);
        let err = query_with_raw(reply).await;
        assert!(matches!(err, Error::LengthMismatch { .. }));
    }

    #[tokio::test]
    async fn test_oversized_reply() {
        let flags = NameFlags::active(false, OwnerNodeType::Mixed);
        let names: Vec<NodeName> = (0..27u8)
            .map(|i| NodeName::new(b"N", i, flags).unwrap())
            .collect();
        let reply = valid_reply(names);
        assert_eq!(reply.len(), 589);

        let err = query_with_raw(reply).await;
        assert!(matches!(
            err,
            Error::DatagramTooLarge { len: 589, max: 576 }
        ));
    }
}
